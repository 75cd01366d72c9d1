//! Application state for focus and picker navigation.
//!
//! The draft itself lives in `MoveBuilder`; this only tracks what the
//! keyboard is pointed at.

/// Form field that receives Left/Right and typed characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Level,
    AttackType,
    MoveType,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Level, Field::AttackType, Field::MoveType];

    pub fn next(self) -> Self {
        let index = self as usize;
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = self as usize;
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Level => "Level",
            Field::AttackType => "Attack Type",
            Field::MoveType => "Move Type",
        }
    }
}

/// Which list the open tag picker is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerStage {
    ChooseType,
    ChooseAxis,
}

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Editing,
    /// Tag picker overlay with its highlighted row.
    TagPicker { stage: PickerStage, cursor: usize },
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    pub focus: Field,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_picking(&self) -> bool {
        matches!(self.mode, AppMode::TagPicker { .. })
    }

    pub fn open_picker(&mut self) {
        self.mode = AppMode::TagPicker {
            stage: PickerStage::ChooseType,
            cursor: 0,
        };
    }

    pub fn choose_axis(&mut self) {
        self.mode = AppMode::TagPicker {
            stage: PickerStage::ChooseAxis,
            cursor: 0,
        };
    }

    /// Returns to the type list, keeping `cursor` on the previously chosen type.
    pub fn back_to_types(&mut self, cursor: usize) {
        self.mode = AppMode::TagPicker {
            stage: PickerStage::ChooseType,
            cursor,
        };
    }

    pub fn close_picker(&mut self) {
        self.mode = AppMode::Editing;
    }

    /// Moves the picker highlight, wrapping within `len` rows.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if let AppMode::TagPicker { cursor, .. } = &mut self.mode {
            if len == 0 {
                *cursor = 0;
                return;
            }
            *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
        }
    }

    #[cfg(test)]
    pub fn picker_cursor(&self) -> Option<usize> {
        match self.mode {
            AppMode::TagPicker { cursor, .. } => Some(cursor),
            AppMode::Editing => None,
        }
    }
}
