use serde::Deserialize;

use crate::models::CategorySummary;

use super::lenient;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CategoryRsp {
    #[serde(deserialize_with = "lenient")]
    pub data: Category,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
}

impl From<CategoryRsp> for CategorySummary {
    fn from(value: CategoryRsp) -> Self {
        CategorySummary { name: value.data.name }
    }
}
