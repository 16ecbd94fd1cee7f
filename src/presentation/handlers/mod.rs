mod health;
mod index;
mod media;
mod result_page;
mod upload;

pub use health::health_handler;
pub use index::index_handler;
pub use media::{download_handler, preview_handler};
pub use result_page::result_page_handler;
pub use upload::{MULTIPART_OVERHEAD_BYTES, UPLOAD_FIELD, UploadRejection, upload_handler};
