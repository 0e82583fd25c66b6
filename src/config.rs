use serde_aux::field_attributes::deserialize_number_from_string;

/// Environment variable naming the active customer.
pub const CUSTOMER_NAME_VAR: &str = "CUSTOMER_NAME";

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    // 仅来自`CUSTOMER_NAME`，不参与配置文件和`APP_*`环境变量的合并
    #[serde(skip)]
    pub customer: CustomerConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Customer setting handed to the greeting handler.
///
/// `None` means the variable was not set at startup, which resolves the
/// same way as an unknown customer.
#[derive(Clone, Debug, Default)]
pub struct CustomerConfig {
    pub name: Option<String>,
}

/// Loads the configuration, reading `CUSTOMER_NAME` once from the process
/// environment.
pub fn config() -> Result<Config, config::ConfigError> {
    build(std::env::var(CUSTOMER_NAME_VAR).ok())
}

/// 配置优先级: 默认值 < config.yaml < APP_* 环境变量
pub fn build(customer_name: Option<String>) -> Result<Config, config::ConfigError> {
    let mut config = config::Config::builder()
        .set_default("web.host", "127.0.0.1")?
        .set_default("web.port", 8000_i64)?
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()?;
    config.customer = CustomerConfig {
        name: customer_name,
    };

    Ok(config)
}
