use crate::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub editable_term: String,
    /// Submission is disabled while the term is empty.
    pub can_submit: bool,
    pub is_loading: bool,
    pub is_error: bool,
    pub items: Vec<ItemRowView>,
}

impl AppViewModel {
    /// Looks up the item shown at a 1-based row.
    pub fn item_at_row(&self, row: usize) -> Option<&ItemRowView> {
        self.items.iter().find(|item| item.row == row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    pub row: usize,
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comment_count: u32,
    pub score: i64,
}
