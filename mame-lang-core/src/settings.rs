//! Run settings and path resolution.
//!
//! Every input and output location is relative to a single root directory.
//! The root defaults to the directory holding the executable, so the tool
//! can sit next to the MxUI folder and be started from anywhere. An optional
//! `mame-lang.toml` in the root overrides individual names:
//! ```toml
//! listing = "gamelist.272.xml"
//! output_dir = "MxUI v1.6/lang/Chinese_Simplified"
//! ```

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use serde::Deserialize;

use crate::error::LangError;

/// Name of the optional settings file in the root directory.
pub const SETTINGS_FILE_NAME: &str = "mame-lang.toml";

/// File names and directories as configured, before resolution.
///
/// Dictionary and report files live in `work_dir`, the list files in
/// `output_dir`, and the listing directly in the root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LangSettings {
    pub listing: PathBuf,
    pub work_dir: PathBuf,
    pub output_dir: PathBuf,
    pub title_dictionary: PathBuf,
    pub bootleg_dictionary: PathBuf,
    pub name_file: PathBuf,
    pub untranslated: PathBuf,
    pub untranslated_pairs: PathBuf,
    pub version_terms: PathBuf,
    pub list_file: PathBuf,
    pub utf8_list_file: PathBuf,
    /// WHATWG label of the list file encoding.
    pub encoding: String,
}

impl Default for LangSettings {
    fn default() -> Self {
        Self {
            listing: PathBuf::from("gamelist.271.xml"),
            work_dir: PathBuf::from(".mame_lang"),
            output_dir: PathBuf::from("MxUI v1.5.2/lang/Chinese_Simplified"),
            title_dictionary: PathBuf::from("base_trans.txt"),
            bootleg_dictionary: PathBuf::from("hack_trans.txt"),
            name_file: PathBuf::from("name_seed.lst"),
            untranslated: PathBuf::from("not_trans.txt"),
            untranslated_pairs: PathBuf::from("not_trans_dic.txt"),
            version_terms: PathBuf::from("vers_trans.txt"),
            list_file: PathBuf::from("mame_cn.lst"),
            utf8_list_file: PathBuf::from("mame_cn_utf8.lst"),
            encoding: "gbk".to_string(),
        }
    }
}

/// Absolute locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub listing: PathBuf,
    pub work_dir: PathBuf,
    pub output_dir: PathBuf,
    pub title_dictionary: PathBuf,
    pub bootleg_dictionary: PathBuf,
    pub name_file: PathBuf,
    pub untranslated: PathBuf,
    pub untranslated_pairs: PathBuf,
    pub version_terms: PathBuf,
    pub list_file: PathBuf,
    pub utf8_list_file: PathBuf,
}

impl LangSettings {
    /// Load settings from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, LangError> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Anchor every configured location at `root`.
    pub fn resolve(&self, root: &Path) -> Result<ResolvedPaths, LangError> {
        let root = std::path::absolute(root)?;
        let work_dir = root.join(&self.work_dir);
        let output_dir = root.join(&self.output_dir);

        Ok(ResolvedPaths {
            listing: root.join(&self.listing),
            title_dictionary: work_dir.join(&self.title_dictionary),
            bootleg_dictionary: work_dir.join(&self.bootleg_dictionary),
            name_file: work_dir.join(&self.name_file),
            untranslated: work_dir.join(&self.untranslated),
            untranslated_pairs: work_dir.join(&self.untranslated_pairs),
            version_terms: work_dir.join(&self.version_terms),
            list_file: output_dir.join(&self.list_file),
            utf8_list_file: output_dir.join(&self.utf8_list_file),
            root,
            work_dir,
            output_dir,
        })
    }

    /// The encoding named by `encoding`.
    pub fn output_encoding(&self) -> Result<&'static Encoding, LangError> {
        resolve_encoding(&self.encoding)
    }
}

/// Look up an encoding by WHATWG label (e.g., "gbk", "shift_jis").
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, LangError> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| LangError::unknown_encoding(label))
}

/// Canonical path of the settings file under `root`.
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE_NAME)
}

/// Resolve the root directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Directory containing the running executable
/// 3. Current working directory
pub fn resolve_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return dir;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_under_root() {
        let paths = LangSettings::default().resolve(Path::new("/srv/mame")).unwrap();
        assert_eq!(paths.root, PathBuf::from("/srv/mame"));
        assert_eq!(paths.listing, PathBuf::from("/srv/mame/gamelist.271.xml"));
        assert_eq!(
            paths.title_dictionary,
            PathBuf::from("/srv/mame/.mame_lang/base_trans.txt")
        );
        assert_eq!(
            paths.list_file,
            PathBuf::from("/srv/mame/MxUI v1.5.2/lang/Chinese_Simplified/mame_cn.lst")
        );
        assert_eq!(
            paths.utf8_list_file,
            PathBuf::from("/srv/mame/MxUI v1.5.2/lang/Chinese_Simplified/mame_cn_utf8.lst")
        );
    }

    #[test]
    fn test_relative_root_made_absolute() {
        let paths = LangSettings::default().resolve(Path::new("some/dir")).unwrap();
        assert!(paths.root.is_absolute());
        assert!(paths.listing.is_absolute());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: LangSettings =
            toml::from_str("listing = \"gamelist.272.xml\"\nencoding = \"gb18030\"\n").unwrap();
        assert_eq!(settings.listing, PathBuf::from("gamelist.272.xml"));
        assert_eq!(settings.work_dir, PathBuf::from(".mame_lang"));
        assert_eq!(settings.output_encoding().unwrap(), encoding_rs::GB18030);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let settings = LangSettings::load(Path::new("/nonexistent/mame-lang.toml")).unwrap();
        assert_eq!(settings, LangSettings::default());
    }

    #[test]
    fn test_resolve_encoding() {
        assert_eq!(resolve_encoding("gbk").unwrap(), encoding_rs::GBK);
        assert_eq!(resolve_encoding("GBK").unwrap(), encoding_rs::GBK);
        assert!(matches!(
            resolve_encoding("klingon"),
            Err(LangError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn test_resolve_root_override() {
        assert_eq!(
            resolve_root(Some(PathBuf::from("/tmp/x"))),
            PathBuf::from("/tmp/x")
        );
    }
}
