pub mod a001_item;
pub mod a002_collection_point;
