use std::future::Future;

use dialoguer::theme::ColorfulTheme;
use store_config::{Config, ConfigManager, FileTokenStore};
use tokio::runtime::{Builder, Runtime};

use crate::{app::App, auth::AuthState};

use super::{core::CliError, io as cli_io, output, ui::UiStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub runtime: Runtime,
    pub app: App,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new_default()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::apply_config(&config);
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let app = build_app(&config_manager, &config);

        let mut context = ShellContext {
            mode,
            runtime,
            app,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        };
        context.restore_session()?;
        Ok(context)
    }

    /// Runs one backend action to completion on the shell's runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Re-reads the stored token, if any, and greets the returning user.
    pub fn restore_session(&mut self) -> Result<(), CliError> {
        let state = self.runtime.block_on(self.app.auth.restore())?;
        match state {
            AuthState::LoggedIn(session) => {
                cli_io::print_success(format!("Welcome back, {}.", session.user));
            }
            AuthState::LoggedOut => {
                if self.mode == CliMode::Interactive {
                    cli_io::print_info("Not logged in. Use `login` to sign in.");
                }
            }
        }
        Ok(())
    }

    /// Switches to a saved configuration. Only a new effective API URL
    /// rebuilds the services and re-validates the stored session.
    pub fn apply_config(&mut self, config: Config) -> Result<(), CliError> {
        output::apply_config(&config);
        let url_changed = config.resolve_api_base_url() != self.app.api.base_url();
        self.config = config;
        if url_changed {
            self.app = build_app(&self.config_manager, &self.config);
            self.restore_session()
        } else {
            self.app.apply_display(&self.config);
            Ok(())
        }
    }

    pub fn style(&self) -> UiStyle {
        UiStyle::detect()
    }

    pub fn prompt(&self) -> String {
        match self.app.auth.current_user() {
            Some(user) => format!("store({})> ", user.username),
            None => "store> ".to_string(),
        }
    }
}

fn build_app(config_manager: &ConfigManager, config: &Config) -> App {
    let store = FileTokenStore::new(config_manager.session_path().to_path_buf());
    App::new(config, Box::new(store))
}
