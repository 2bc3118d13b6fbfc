//! User configuration: XDG-aware directories and TOML settings.
//!
//! Settings live at `~/.config/banchan/settings.toml` (or under
//! `$XDG_CONFIG_HOME`). API credentials can also come from the
//! environment, which wins over the file so secrets can stay out of it.

use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from the environment, falling back to
/// `$HOME` plus the given segments.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_owned());
    let mut path = PathBuf::from(home);
    for seg in home_default {
        path.push(seg);
    }
    path
}

/// Application configuration directory, created on first use.
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("banchan");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the configuration directory, created on first use.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the settings file inside [`config_dir`].
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// Typed settings with serde defaults for every field, so a partial file
/// (or none at all) always yields a usable configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key segment of the COOKRCP01 endpoint; the public sample key works
    /// for small windows.
    pub recipe_api_key: String,
    /// Base URL of the recipe service.
    pub recipe_base_url: String,
    /// `X-Naver-Client-Id` header value for the shopping API.
    pub naver_client_id: String,
    /// `X-Naver-Client-Secret` header value for the shopping API.
    pub naver_client_secret: String,
    /// Shopping search endpoint.
    pub shop_base_url: String,
    /// Query used for the featured shopping feed on the home screen.
    pub home_shop_query: String,
    /// Dish category used for the featured recipe feed on the home screen.
    pub home_recipe_category: String,
    /// Records per page for recipe lists.
    pub recipe_page_size: u32,
    /// Records per page for shopping lists.
    pub shop_page_size: u32,
    /// Optional override for the bundled category CSV.
    pub category_csv: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipe_api_key: "sample".to_owned(),
            recipe_base_url: "http://openapi.foodsafetykorea.go.kr/api".to_owned(),
            naver_client_id: String::new(),
            naver_client_secret: String::new(),
            shop_base_url: "https://openapi.naver.com/v1/search/shop.json".to_owned(),
            home_shop_query: "고양이집".to_owned(),
            home_recipe_category: "반찬".to_owned(),
            recipe_page_size: 10,
            shop_page_size: 30,
            category_csv: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, tolerating a missing or unparsable file
    /// (defaults apply), then apply environment overrides.
    pub fn load_from(path: &Path) -> Self {
        let mut settings = std::fs::read_to_string(path)
            .ok()
            .and_then(|text| match toml::from_str::<Self>(&text) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "ignoring unparsable settings file");
                    None
                }
            })
            .unwrap_or_default();
        settings.apply_env_overrides();
        settings.recipe_page_size = settings.recipe_page_size.max(1);
        settings.shop_page_size = settings.shop_page_size.max(1);
        settings
    }

    /// Load settings from the default location.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Credentials from the environment win over the file.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("BANCHAN_NAVER_CLIENT_ID")
            && !v.trim().is_empty()
        {
            self.naver_client_id = v;
        }
        if let Ok(v) = env::var("BANCHAN_NAVER_CLIENT_SECRET")
            && !v.trim().is_empty()
        {
            self.naver_client_secret = v;
        }
        if let Ok(v) = env::var("BANCHAN_RECIPE_API_KEY")
            && !v.trim().is_empty()
        {
            self.recipe_api_key = v;
        }
    }

    /// Whether shopping requests can be signed at all.
    #[must_use]
    pub fn has_naver_credentials(&self) -> bool {
        !self.naver_client_id.is_empty() && !self.naver_client_secret.is_empty()
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    /// What: Defaults fill every field when no settings file exists
    ///
    /// - Input: A path that does not exist
    /// - Output: Default page sizes, endpoints, and empty credentials
    fn config_missing_file_yields_defaults() {
        let _guard = super::test_mutex().lock().expect("test mutex poisoned");
        let dir = tempfile::tempdir().expect("tempdir");
        let s = Settings::load_from(&dir.path().join("absent.toml"));
        assert_eq!(s.recipe_page_size, 10);
        assert_eq!(s.shop_page_size, 30);
        assert_eq!(s.home_shop_query, "고양이집");
        assert!(s.shop_base_url.contains("shop.json"));
    }

    #[test]
    /// What: A partial TOML file overrides only the named fields
    ///
    /// - Input: File setting the page size and home query
    /// - Output: Those fields changed; everything else at defaults
    fn config_partial_file_merges_with_defaults() {
        let _guard = super::test_mutex().lock().expect("test mutex poisoned");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        let mut f = std::fs::File::create(&path).expect("create");
        writeln!(f, "shop_page_size = 5\nhome_shop_query = \"강아지옷\"").expect("write");
        let s = Settings::load_from(&path);
        assert_eq!(s.shop_page_size, 5);
        assert_eq!(s.home_shop_query, "강아지옷");
        assert_eq!(s.recipe_page_size, 10);
    }

    #[test]
    /// What: Environment credentials override the file
    ///
    /// - Input: File with one client id, env var with another
    /// - Output: The environment value wins; env restored afterwards
    fn config_env_overrides_file_credentials() {
        let _guard = super::test_mutex().lock().expect("test mutex poisoned");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "naver_client_id = \"from-file\"").expect("write");
        let orig = env::var_os("BANCHAN_NAVER_CLIENT_ID");
        unsafe { env::set_var("BANCHAN_NAVER_CLIENT_ID", "from-env") };
        let s = Settings::load_from(&path);
        unsafe {
            match orig {
                Some(v) => env::set_var("BANCHAN_NAVER_CLIENT_ID", v),
                None => env::remove_var("BANCHAN_NAVER_CLIENT_ID"),
            }
        }
        assert_eq!(s.naver_client_id, "from-env");
    }

    #[test]
    /// What: Zero page sizes are clamped to one
    ///
    /// - Input: File setting both page sizes to zero
    /// - Output: Both sizes come back as one
    fn config_page_sizes_clamped() {
        let _guard = super::test_mutex().lock().expect("test mutex poisoned");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "recipe_page_size = 0\nshop_page_size = 0").expect("write");
        let s = Settings::load_from(&path);
        assert_eq!(s.recipe_page_size, 1);
        assert_eq!(s.shop_page_size, 1);
    }
}
