use crate::asset_pipeline::bitmap::types::TrueColorImage;
use crate::asset_pipeline::common::error::Result;

pub trait BitmapReader {
    fn read_bitmap(&self, data: &[u8]) -> Result<TrueColorImage>;
}
