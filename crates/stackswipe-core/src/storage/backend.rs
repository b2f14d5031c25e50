use crate::error::Result;

/// Persistence for the liked-technology list.
///
/// The list is stored whole: `save_liked_ids` replaces whatever was there
/// and `load_liked_ids` returns it in the saved order.
pub trait PreferenceStore {
    fn load_liked_ids(&self) -> Result<Vec<String>>;

    fn save_liked_ids(&self, ids: &[String]) -> Result<()>;

    /// Add `id` to the end of the stored list unless it is already there.
    /// Returns `false` when it was already liked.
    fn append_liked(&self, id: &str) -> Result<bool> {
        let mut ids = self.load_liked_ids()?;
        if ids.iter().any(|existing| existing == id) {
            return Ok(false);
        }
        ids.push(id.to_string());
        self.save_liked_ids(&ids)?;
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        self.save_liked_ids(&[])
    }
}
