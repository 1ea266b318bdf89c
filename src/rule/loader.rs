//! 规则加载器
//! 支持内置/内联 JSON/本地文件三种规则来源，统一走构建期校验

use std::fs;
use std::path::Path;

use crate::config::RuleOrigin;
use crate::error::{RscResult, RsclassifyError};
use super::model::RuleDocument;
use super::table::RuleTable;

#[derive(Debug, Default)]
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按规则来源加载规则表
    pub fn load(&self, origin: &RuleOrigin) -> RscResult<RuleTable> {
        match origin {
            RuleOrigin::Embedded => self.load_embedded(),
            RuleOrigin::Inline(json) => self.load_from_str(json),
            RuleOrigin::LocalFile(path) => self.load_from_file(path),
        }
    }

    /// 解析内联 JSON 规则文档
    /// 解析通过后仍执行与手工构建一致的构建期校验
    pub fn load_from_str(&self, json: &str) -> RscResult<RuleTable> {
        let doc: RuleDocument = serde_json::from_str(json).map_err(|e| {
            RsclassifyError::RuleParseError(format!("规则文档JSON反序列化失败: {}", e))
        })?;
        RuleTable::from_document(doc)
    }

    /// 读取本地规则文件
    pub fn load_from_file(&self, path: &Path) -> RscResult<RuleTable> {
        let raw = fs::read_to_string(path).map_err(|e| {
            RsclassifyError::RuleLoadError(format!(
                "本地规则文件[{}]读取失败: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!("Loaded rule file {} ({} bytes)", path.display(), raw.len());
        self.load_from_str(&raw)
    }

    #[cfg(feature = "embedded-rules")]
    fn load_embedded(&self) -> RscResult<RuleTable> {
        Ok(crate::rsclassify_rules::EMBEDDED_RULE_TABLE.as_ref().clone())
    }

    #[cfg(not(feature = "embedded-rules"))]
    fn load_embedded(&self) -> RscResult<RuleTable> {
        Err(RsclassifyError::RuleLoadError(
            "embedded-rules feature 未启用".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_RULES_JSON: &str = r#"
    {
        "default": { "primary": "Unknown", "secondary": "Unknown" },
        "rules": [
            {
                "keys": ["Agadir", "Taroudant", "Ouled teima"],
                "category": { "primary": "Souss massa", "secondary": "Africa" }
            },
            {
                "keys": ["New york", "NYC"],
                "category": { "primary": "New York", "secondary": "North america" }
            }
        ]
    }
    "#;

    #[test]
    fn test_load_from_str() {
        let table = RuleLoader::new().load_from_str(CITY_RULES_JSON).unwrap();
        assert_eq!(table.rule_count(), 2);
        assert_eq!(table.key_count(), 5);
        assert_eq!(table.category_of("NYC").as_pair(), ("New York", "North america"));
    }

    #[test]
    fn test_missing_default_surfaces_as_parse_error() {
        let json = r#"{ "rules": [] }"#;
        let result = RuleLoader::new().load_from_str(json);
        assert!(matches!(result, Err(RsclassifyError::RuleParseError(_))));
    }

    #[test]
    fn test_duplicate_key_in_document_rejected() {
        let json = r#"
        {
            "default": { "primary": "Unknown", "secondary": "Unknown" },
            "rules": [
                { "keys": ["Agadir"], "category": { "primary": "Souss massa", "secondary": "Africa" } },
                { "keys": ["Agadir"], "category": { "primary": "Elsewhere", "secondary": "Africa" } }
            ]
        }
        "#;
        let result = RuleLoader::new().load_from_str(json);
        assert!(matches!(result, Err(RsclassifyError::RuleConflictError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("rsclassify_loader_test_rules.json");
        fs::write(&path, CITY_RULES_JSON).unwrap();

        let table = RuleLoader::new().load_from_file(&path).unwrap();
        assert_eq!(table.category_of("Agadir").as_pair(), ("Souss massa", "Africa"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let path = std::env::temp_dir().join("rsclassify_no_such_rules.json");
        let result = RuleLoader::new().load_from_file(&path);
        assert!(matches!(result, Err(RsclassifyError::RuleLoadError(_))));
    }

    #[cfg(feature = "embedded-rules")]
    #[test]
    fn test_load_embedded_origin() {
        let table = RuleLoader::new().load(&RuleOrigin::Embedded).unwrap();
        assert!(table.rule_count() > 0);
        assert_eq!(table.category_of("Agadir").as_pair(), ("Souss massa", "Africa"));
    }
}
