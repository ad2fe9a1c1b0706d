//! Data source of the demo table

use crate::capability::{ItemContent, RecyclableItem};
use crate::cells::{CircledRow, OptionRow, ProfileRow, RegularHeader};
use crate::coordinator::IndexPath;
use crate::table::TableDataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoRow {
    Profile,
    Circled,
    Option,
}

impl DemoRow {
    fn identifier(&self) -> &'static str {
        match self {
            DemoRow::Profile => ProfileRow::IDENTIFIER,
            DemoRow::Circled => CircledRow::IDENTIFIER,
            DemoRow::Option => OptionRow::IDENTIFIER,
        }
    }

    fn height(&self) -> u16 {
        match self {
            DemoRow::Profile => ProfileRow::HEIGHT,
            DemoRow::Circled => CircledRow::HEIGHT,
            DemoRow::Option => OptionRow::HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSection {
    /// `None` for a section without header
    pub title: Option<&'static str>,
    pub rows: Vec<DemoRow>,
}

/// Loaded row content, indexed like the table: `sections[section][row]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoContent {
    pub sections: Vec<Vec<ItemContent>>,
}

impl DemoContent {
    /// What the simulated fetch returns
    pub fn sample() -> Self {
        Self {
            sections: vec![
                vec![
                    ItemContent::new("Almas Zainoldin", "iOS developer · Almaty"),
                    ItemContent::new("Circles", "3 shared with you"),
                ],
                vec![
                    ItemContent::new("Notifications", "On"),
                    ItemContent::new("Privacy", "Friends"),
                ],
                vec![ItemContent::new("Storage", "1.2 GB")],
            ],
        }
    }

    fn get(&self, path: IndexPath) -> Option<&ItemContent> {
        self.sections.get(path.section)?.get(path.row)
    }
}

pub struct DemoDataSource {
    sections: Vec<DemoSection>,
    content: Option<DemoContent>,
}

impl Default for DemoDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoDataSource {
    pub fn new() -> Self {
        Self {
            sections: vec![
                DemoSection {
                    title: None,
                    rows: vec![DemoRow::Profile, DemoRow::Circled],
                },
                DemoSection {
                    title: Some("Options"),
                    rows: vec![DemoRow::Option, DemoRow::Option],
                },
                DemoSection {
                    title: Some("Options"),
                    rows: vec![DemoRow::Option],
                },
            ],
            content: None,
        }
    }

    pub fn sections(&self) -> &[DemoSection] {
        &self.sections
    }

    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }

    pub fn set_content(&mut self, content: DemoContent) {
        self.content = Some(content);
    }

    pub fn clear_content(&mut self) {
        self.content = None;
    }

    fn row(&self, path: IndexPath) -> DemoRow {
        self.sections
            .get(path.section)
            .and_then(|section| section.rows.get(path.row))
            .copied()
            .unwrap_or(DemoRow::Option)
    }
}

impl TableDataSource for DemoDataSource {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn rows_in_section(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.rows.len())
    }

    fn reuse_identifier(&self, path: IndexPath) -> &str {
        self.row(path).identifier()
    }

    /// Before the load completes rows get empty content and only the skeleton
    /// gives them shape
    fn configure_row(&self, path: IndexPath, item: &mut dyn RecyclableItem) {
        let content = self
            .content
            .as_ref()
            .and_then(|content| content.get(path))
            .cloned()
            .unwrap_or_default();
        item.configure(&content);
    }

    fn header_identifier(&self, section: usize) -> Option<&str> {
        self.sections
            .get(section)?
            .title
            .map(|_| RegularHeader::IDENTIFIER)
    }

    fn configure_header(&self, section: usize, item: &mut dyn RecyclableItem) {
        if let Some(title) = self.sections.get(section).and_then(|s| s.title) {
            item.configure(&ItemContent::new(title, ""));
        }
    }

    fn row_height(&self, path: IndexPath) -> u16 {
        self.row(path).height()
    }

    fn header_height(&self, _section: usize) -> u16 {
        RegularHeader::HEIGHT
    }
}
