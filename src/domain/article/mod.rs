pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleData, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleEntities, ArticleId, ArticleStatus, ArticleTitle, ArticleUrl,
    ContentS3Path, Publisher,
};
