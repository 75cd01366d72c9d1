//! Maintains the CLI message log in response to builder events.
use client_frontend_core::{
    event::{BuilderEvent, EventConsumer, EventImpact},
    message::MessageLog,
};
use move_core::DraftError;

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }

    fn push_dropped(&mut self, dropped_tags: usize) {
        if dropped_tags > 0 {
            self.log
                .push_warning(format!("Removed {dropped_tags} tag(s) from the draft"));
        }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &BuilderEvent) -> EventImpact {
        match event {
            // Typing is visible in the form itself.
            BuilderEvent::NameChanged
            | BuilderEvent::LevelChanged(_)
            | BuilderEvent::TagPickerOpened
            | BuilderEvent::TagTypeSelected(_)
            | BuilderEvent::CostAxisSelected(_)
            | BuilderEvent::TagPickerClosed => {}
            BuilderEvent::AttackTypeChanged {
                attack_type,
                dropped_tags,
            } => {
                self.log.push_text(format!("Attack type set to {attack_type}"));
                self.push_dropped(*dropped_tags);
            }
            BuilderEvent::MoveTypeChanged {
                move_type,
                dropped_tags,
            } => {
                self.log.push_text(format!("Move type set to {move_type}"));
                self.push_dropped(*dropped_tags);
            }
            BuilderEvent::TagAdded(tag) => {
                self.log.push_text(format!(
                    "Added {} tag ({:+} damage, {:+} cooldown)",
                    tag.tag_type, tag.damage_cost, tag.cooldown_cost
                ));
            }
            BuilderEvent::TagsCleared { dropped_tags } => {
                self.log.push_text(format!("Cleared {dropped_tags} tag(s)"));
            }
            BuilderEvent::MoveAdded { name, stats } => {
                let name = if name.is_empty() { "(unnamed)" } else { name };
                self.log.push_text(format!(
                    "Added move \"{name}\": damage {}, cooldown {}, {} XP",
                    stats.damage, stats.cooldown, stats.xp
                ));
            }
            BuilderEvent::DraftCleared => self.log.push_text("Draft cleared"),
        }

        EventImpact::redraw()
    }

    fn on_rejected(&mut self, error: &DraftError) -> EventImpact {
        self.log.push_warning(error.to_string());
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
