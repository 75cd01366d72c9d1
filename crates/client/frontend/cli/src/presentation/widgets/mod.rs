//! Individual panels of the move builder screen.
//!
//! Each widget is a `render(frame, area, ...)` function over view-model
//! data; none of them touch the builder.
pub mod draft_form;
pub mod footer;
pub mod header;
pub mod messages;
pub mod move_table;
pub mod tag_picker;
