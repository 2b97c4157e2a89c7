use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "name", content = "value")]
pub enum Label {
    Suite(String),
    TestMethod(String),
    Framework(String),
    Language(String),
}
