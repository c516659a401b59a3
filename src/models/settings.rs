/// Values from the `env` sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentSettings {
    pub initial_password: String,
}
