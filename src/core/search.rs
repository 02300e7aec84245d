/// Which kind of page element an indexed snippet came from; mirrors the
/// selector groups the adapter feeds in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryKind {
    Card,
    Section,
    Faq,
    Content,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Card => "card",
            EntryKind::Section => "section",
            EntryKind::Faq => "faq",
            EntryKind::Content => "content",
        }
    }
}

pub struct SearchEntry {
    /// Lowercased snippet text; matched and displayed as-is.
    pub text: String,
    /// Id of the owning page section, or "unknown".
    pub section: String,
    pub kind: EntryKind,
}

/// Flat in-memory index over the static page content, built once at startup.
#[derive(Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn push(&mut self, text: &str, section: &str, kind: EntryKind) {
        self.entries.push(SearchEntry {
            text: text.to_lowercase(),
            section: section.to_string(),
            kind,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&SearchEntry> {
        self.entries.get(index)
    }

    /// Case-insensitive containment query. Returns the indices of the first
    /// `limit` matching entries, in index order; an empty query matches
    /// nothing.
    pub fn query(&self, raw: &str, limit: usize) -> Vec<usize> {
        let q = raw.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.text.contains(&q))
            .map(|(i, _)| i)
            .take(limit)
            .collect()
    }
}

/// Wrap each occurrence of `query` in `<mark>` tags. Matching is
/// ASCII-case-insensitive so byte offsets stay valid for slicing.
pub fn highlight(text: &str, query: &str) -> String {
    let q = query.trim().to_ascii_lowercase();
    if q.is_empty() {
        return text.to_string();
    }
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len() + 16);
    let mut at = 0;
    while let Some(rel) = lower[at..].find(&q) {
        let start = at + rel;
        let end = start + q.len();
        out.push_str(&text[at..start]);
        out.push_str("<mark>");
        out.push_str(&text[start..end]);
        out.push_str("</mark>");
        at = end;
    }
    out.push_str(&text[at..]);
    out
}

/// FAQ filter predicate: an empty query shows everything, otherwise the
/// query must appear in the question or the answer.
pub fn faq_matches(question: &str, answer: &str, raw_query: &str) -> bool {
    let q = raw_query.trim().to_lowercase();
    q.is_empty() || question.to_lowercase().contains(&q) || answer.to_lowercase().contains(&q)
}
