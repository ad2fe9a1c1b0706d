use crate::capability::RecyclableItem;
use crate::coordinator::IndexPath;

/// Supplies the table with its structure and populates items
pub trait TableDataSource {
    fn number_of_sections(&self) -> usize;

    fn rows_in_section(&self, section: usize) -> usize;

    /// Template the row at `path` is built from
    fn reuse_identifier(&self, path: IndexPath) -> &str;

    fn configure_row(&self, path: IndexPath, item: &mut dyn RecyclableItem);

    /// Template of the section's header. `None` means the section has no header
    fn header_identifier(&self, _section: usize) -> Option<&str> {
        None
    }

    fn configure_header(&self, _section: usize, _item: &mut dyn RecyclableItem) {}

    fn row_height(&self, _path: IndexPath) -> u16 {
        1
    }

    fn header_height(&self, _section: usize) -> u16 {
        1
    }
}
