use std::env;
use std::fmt;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub access_password: Option<String>,
    pub static_dir: String,
    pub lucky_dir: String,
    pub site_title: String,
    pub frontend_url: Option<String>,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        // ACCESS_PASSWORD wins over the legacy PASSWORD variable; an empty
        // value counts as unset and leaves the gate open.
        let access_password = gate_password(
            env::var("ACCESS_PASSWORD").ok(),
            env::var("PASSWORD").ok(),
        );
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "./static".into());
        let lucky_dir = env::var("LUCKY_DIR").unwrap_or_else(|_| "./lucky-draw".into());
        let site_title = env::var("SITE_TITLE").unwrap_or_else(|_| "Lucky Draw".into());
        let frontend_url = env::var("FRONTEND_URL").ok().and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                Some(trimmed.trim_end_matches('/').to_string())
            } else {
                None
            }
        });
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        Ok(Self {
            port,
            access_password,
            static_dir,
            lucky_dir,
            site_title,
            frontend_url,
            is_production,
        })
    }
}

fn gate_password(access: Option<String>, fallback: Option<String>) -> Option<String> {
    access
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
}

// Startup logs print the whole config; keep the password out of them.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field(
                "access_password",
                &self.access_password.as_deref().map(|_| "<redacted>"),
            )
            .field("static_dir", &self.static_dir)
            .field("lucky_dir", &self.lucky_dir)
            .field("site_title", &self.site_title)
            .field("frontend_url", &self.frontend_url)
            .field("is_production", &self.is_production)
            .finish()
    }
}
