mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{HubSettings, ServerSettings, Settings};

/// Prefix for environment overrides, e.g. `ROOMCAST__SERVER__HOST`.
pub const ENV_PREFIX: &str = "ROOMCAST";

/// Plain port variable honoured on top of everything else.
pub const PORT_VAR: &str = "PORT";

/// Loads the configuration from `config/default`, `ROOMCAST__*` environment
/// variables and finally `PORT`, merging whatever is present over the
/// defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("server.port", std::env::var(PORT_VAR).ok())?;

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
        },
        hub: HubSettings {
            replay_capacity: partial
                .hub
                .as_ref()
                .and_then(|h| h.replay_capacity)
                .unwrap_or(default.hub.replay_capacity),
        },
    })
}
