use crate::domain::model::SectionDefinition;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 取得原始 CSV 文字（本地檔案或遠端 URL）
#[async_trait]
pub trait SourceReader: Send + Sync {
    /// `source_name` is only used to label errors ("skills", "multipliers").
    async fn read_text(&self, source_name: &str, location: &str) -> Result<String>;
}

/// 報表執行所需的設定
pub trait ReportSettings: Send + Sync {
    fn skills_location(&self) -> &str;
    fn multipliers_location(&self) -> &str;
    fn section_definitions(&self) -> Vec<SectionDefinition>;

    /// Unknown (main, alt) pairs are an error instead of an untrained character.
    fn strict(&self) -> bool {
        false
    }
}
