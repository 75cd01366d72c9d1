//! Glue code tying the move builder and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{
    EventConsumer, FrontendConfig, frontend::FrontendApp, message::MessageLog,
};
use move_core::{Move, MoveBuilder};

use crate::{
    config::CliConfig,
    event::{CliEventConsumer, EventLoop},
    presentation::{terminal, widgets::header::TITLE},
};

pub struct CliApp {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    builder: MoveBuilder,
}

pub struct CliAppBuilder {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    moves: Option<Vec<Move>>,
}

impl CliAppBuilder {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
            moves: None,
        }
    }

    /// Starts the session with these moves instead of the configured default.
    pub fn moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn build(self) -> CliApp {
        let moves = self.moves.unwrap_or_else(|| {
            if self.frontend_config.preload_examples {
                Move::examples()
            } else {
                Vec::new()
            }
        });

        CliApp {
            frontend_config: self.frontend_config,
            cli_config: self.cli_config,
            builder: MoveBuilder::with_moves(moves),
        }
    }
}

impl CliApp {
    pub fn builder(frontend_config: FrontendConfig, cli_config: CliConfig) -> CliAppBuilder {
        CliAppBuilder::new(frontend_config, cli_config)
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!(
            preloaded = self.builder.moves().len(),
            "CLI client starting..."
        );

        let CliApp {
            frontend_config,
            cli_config,
            builder,
        } = self;

        let mut messages = MessageLog::new(frontend_config.messages.capacity);
        messages.push_text(format!("Welcome to the {TITLE}."));
        let consumer = CliEventConsumer::new(messages);

        let event_loop = EventLoop::new(builder, consumer, cli_config);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            messages = consumer.take_message_log().len(),
            "CLI client exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliApp {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
