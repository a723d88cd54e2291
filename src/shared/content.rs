//! Course Content Types
//!
//! This module defines the served collections and the document shape stored
//! in each of them. Field names on the wire follow the ones the web client
//! already consumes (`CourseDetails`, `imageURL`, `videoURL`, `_id`).
//!
//! # Collections
//!
//! | Name       | Document type         |
//! |------------|-----------------------|
//! | `ageofai`  | [`AgeOfAiEntry`]      |
//! | `devtools` | [`CourseEntry`]       |
//! | `webdev`   | [`ArticleEntry`]      |
//! | `road`     | [`ArticleEntry`]      |
//! | `tools`    | [`MediaArticleEntry`] |
//! | `working`  | [`MediaArticleEntry`] |
//!
//! The set is closed: a name outside it never reaches the store.

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A served content collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    AgeOfAi,
    DevTools,
    WebDev,
    Road,
    Tools,
    Working,
}

impl Collection {
    /// Every served collection
    pub const ALL: [Collection; 6] = [
        Collection::AgeOfAi,
        Collection::DevTools,
        Collection::WebDev,
        Collection::Road,
        Collection::Tools,
        Collection::Working,
    ];

    /// The name used in URLs and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::AgeOfAi => "ageofai",
            Collection::DevTools => "devtools",
            Collection::WebDev => "webdev",
            Collection::Road => "road",
            Collection::Tools => "tools",
            Collection::Working => "working",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = SharedError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.as_str() == name)
            .ok_or_else(|| SharedError::unknown_collection(name))
    }
}

/// A document type bound to the collections that hold it
pub trait Document: Serialize + DeserializeOwned + Send + Unpin + 'static {
    /// Collections whose documents have this shape
    const COLLECTIONS: &'static [Collection];

    /// Whether documents of this type may be stored in `collection`
    fn belongs_to(collection: Collection) -> bool {
        Self::COLLECTIONS.contains(&collection)
    }
}

/// Entry of the `ageofai` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgeOfAiEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Vec<String>,
    #[serde(default)]
    pub keypoints: Vec<String>,
}

impl Document for AgeOfAiEntry {
    const COLLECTIONS: &'static [Collection] = &[Collection::AgeOfAi];
}

/// Entry of the `devtools` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourseEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Vec<String>,
    #[serde(rename = "CourseDetails", default)]
    pub course_details: Vec<String>,
    #[serde(default)]
    pub keypoints: Vec<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Vec<String>,
    #[serde(rename = "videoURL", default)]
    pub video_url: Vec<String>,
}

impl Document for CourseEntry {
    const COLLECTIONS: &'static [Collection] = &[Collection::DevTools];
}

/// Entry of the `webdev` and `road` collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArticleEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub keypoints: Vec<String>,
}

impl Document for ArticleEntry {
    const COLLECTIONS: &'static [Collection] = &[Collection::WebDev, Collection::Road];
}

/// Entry of the `tools` and `working` collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MediaArticleEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub keypoints: Vec<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Vec<String>,
    #[serde(rename = "videoURL", default)]
    pub video_url: Vec<String>,
}

impl Document for MediaArticleEntry {
    const COLLECTIONS: &'static [Collection] = &[Collection::Tools, Collection::Working];
}

/// A stored document together with its store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument<D> {
    #[serde(rename = "_id")]
    pub id: uuid::Uuid,
    #[serde(flatten)]
    pub body: D,
}
