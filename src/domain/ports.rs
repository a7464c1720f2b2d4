use crate::domain::model::{ConvertOptions, ViewStyle};
use std::path::Path;

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn skip_header(&self) -> bool;
    fn style(&self) -> ViewStyle;

    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            skip_header: self.skip_header(),
            style: self.style(),
        }
    }
}
