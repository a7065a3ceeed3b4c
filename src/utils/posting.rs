/// One entry of a term's posting list.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub doc_id: String,
    pub tf_idf: f64,
}

impl Posting {
    pub fn new(doc_id: String, tf_idf: f64) -> Self {
        Self { doc_id, tf_idf }
    }
}
