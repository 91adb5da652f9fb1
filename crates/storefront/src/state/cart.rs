//! Cart state manager.
//!
//! Owns the ordered sequence of cart lines for the current identity and
//! writes the full sequence through to the keyed store after every
//! mutation. Insertion order is display order.

use std::sync::Arc;

use tracing::instrument;

use sneakfit_core::{CartLine, IdentitySnapshot, Price, ProductId, Quantity, Size};

use crate::store::KeyedStore;

use super::repository::CollectionRepository;
use super::{key_prefixes, storage_key};

/// State manager for the current identity's cart.
///
/// The host constructs one manager per active session and calls
/// [`CartManager::init`] on every identity change (including the initial
/// one). Until `init` completes with a resolved identity, mutations apply
/// in memory only - the write-back guard keeps a not-yet-loaded cart from
/// overwriting a stored one during a fast identity switch.
pub struct CartManager {
    repository: CollectionRepository<CartLine>,
    key: String,
    lines: Vec<CartLine>,
    initialized: bool,
}

impl CartManager {
    /// Create a manager over a shared keyed store.
    ///
    /// The manager starts uninitialized; call [`CartManager::init`] with
    /// the current identity snapshot before use.
    #[must_use]
    pub fn new(store: Arc<dyn KeyedStore>) -> Self {
        Self {
            repository: CollectionRepository::new(store),
            key: key_prefixes::CART.to_owned(),
            lines: Vec::new(),
            initialized: false,
        }
    }

    /// Re-run the load lifecycle for an identity change.
    ///
    /// A `Loading` snapshot is ignored: resolving a key from a stale
    /// identity mid-login would load (and later overwrite) the wrong
    /// record. For a resolved identity, in-memory state is discarded and
    /// replaced by whatever is stored under the new key - or the empty
    /// sequence when nothing (or nothing readable) is stored there.
    #[instrument(skip(self, snapshot))]
    pub fn init(&mut self, snapshot: &IdentitySnapshot) {
        let IdentitySnapshot::Ready(identity) = snapshot else {
            tracing::debug!("identity still resolving, deferring cart load");
            return;
        };

        self.initialized = false;
        self.key = storage_key(key_prefixes::CART, identity);
        self.lines = self.repository.load(&self.key);
        self.initialized = true;
    }

    /// Drop in-memory state and disable write-back, without writing.
    pub fn dispose(&mut self) {
        self.initialized = false;
        self.lines.clear();
    }

    /// Whether the load lifecycle has completed for the current identity.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Add a line, merging quantities into an existing line at the same
    /// (`product_id`, `size`).
    ///
    /// On a merge the existing line keeps all its other fields (including
    /// its snapshotted price and details); only the quantity grows.
    pub fn add_line(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&line.product_id, &line.size))
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            self.lines.push(line);
        }
        self.persist();
    }

    /// Remove the line at (`product_id`, `size`); absent match is a no-op.
    pub fn remove_line(&mut self, product_id: &ProductId, size: &Size) {
        let Some(index) = self.lines.iter().position(|l| l.matches(product_id, size)) else {
            return;
        };
        self.lines.remove(index);
        self.persist();
    }

    /// Set the quantity of the line at (`product_id`, `size`).
    ///
    /// Quantities below 1 are rejected silently - removal is the only way
    /// for a line to reach zero. Absent match is a no-op.
    pub fn set_quantity(&mut self, product_id: &ProductId, size: &Size, quantity: u32) {
        let Ok(quantity) = Quantity::new(quantity) else {
            tracing::debug!(%product_id, %size, "ignoring quantity update below 1");
            return;
        };
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product_id, size))
        else {
            return;
        };
        line.quantity = quantity;
        self.persist();
    }

    /// Move the line at (`product_id`, `from`) to size `to`.
    ///
    /// If a line already exists at (`product_id`, `to`) the two merge: the
    /// destination's quantity becomes the sum and the source line is
    /// removed, preserving the one-line-per-(product, size) invariant.
    /// Otherwise the source line's size is rewritten in place, keeping its
    /// position. Absent source is a no-op.
    pub fn change_size(&mut self, product_id: &ProductId, from: &Size, to: Size) {
        let Some(index) = self.lines.iter().position(|l| l.matches(product_id, from)) else {
            return;
        };
        let source = self.lines.remove(index);

        if let Some(destination) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product_id, &to))
        {
            destination.quantity = destination.quantity.saturating_add(source.quantity);
        } else {
            let mut line = source;
            line.size = to;
            self.lines.insert(index, line);
        }
        self.persist();
    }

    /// Replace the cart with the empty sequence.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Read-only snapshot of the lines, in display order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether a line exists at (`product_id`, `size`).
    #[must_use]
    pub fn contains(&self, product_id: &ProductId, size: &Size) -> bool {
        self.lines.iter().any(|l| l.matches(product_id, size))
    }

    /// Total price over all lines, recomputed on every read.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Price::ZERO, Price::saturating_add)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity.get())).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the full sequence through to the current key.
    ///
    /// Suppressed until the load lifecycle completes, so a manager that has
    /// not finished loading can never clobber a stored cart.
    fn persist(&self) {
        if !self.initialized {
            return;
        }
        self.repository.save(&self.key, &self.lines);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use sneakfit_core::ItemDetails;

    fn manager() -> CartManager {
        let mut cart = CartManager::new(Arc::new(MemoryStore::new()));
        cart.init(&IdentitySnapshot::guest());
        cart
    }

    fn line(product: &str, size: &str, quantity: u32, cents: i64) -> CartLine {
        CartLine::new(
            ProductId::new(product),
            Size::new(size),
            Quantity::new(quantity).unwrap(),
            Price::from_cents(cents).unwrap(),
            ItemDetails::named("Air Zoom"),
        )
    }

    fn quantity_at(cart: &CartManager, product: &str, size: &str) -> Option<u32> {
        cart.lines()
            .iter()
            .find(|l| l.matches(&ProductId::new(product), &Size::new(size)))
            .map(|l| l.quantity.get())
    }

    #[test]
    fn test_add_appends_distinct_lines_in_order() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.add_line(line("p2", "42", 1, 2000));
        cart.add_line(line("p1", "43", 1, 1000));

        let keys: Vec<_> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id.as_str().to_owned(), l.size.as_str().to_owned()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("p1".to_owned(), "42".to_owned()),
                ("p2".to_owned(), "42".to_owned()),
                ("p1".to_owned(), "43".to_owned()),
            ]
        );
    }

    #[test]
    fn test_add_merges_quantities_and_keeps_existing_fields() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 2, 1000));

        // Same key, different snapshotted price: the existing line wins.
        cart.add_line(line("p1", "42", 3, 9999));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(quantity_at(&cart, "p1", "42"), Some(5));
        assert_eq!(
            cart.lines().first().unwrap().unit_price,
            Price::from_cents(1000).unwrap()
        );
    }

    #[test]
    fn test_uniqueness_invariant_under_any_add_sequence() {
        let mut cart = manager();
        for _ in 0..4 {
            cart.add_line(line("p1", "42", 1, 1000));
            cart.add_line(line("p1", "43", 1, 1000));
            cart.add_line(line("p2", "42", 1, 2000));
        }

        let mut keys: Vec<_> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id.clone(), l.size.clone()))
            .collect();
        let total = keys.len();
        keys.sort_by(|a, b| {
            (a.0.as_str(), a.1.as_str()).cmp(&(b.0.as_str(), b.1.as_str()))
        });
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.remove_line(&ProductId::new("p1"), &Size::new("42"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.remove_line(&ProductId::new("p1"), &Size::new("43"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.set_quantity(&ProductId::new("p1"), &Size::new("42"), 7);
        assert_eq!(quantity_at(&cart, "p1", "42"), Some(7));
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected_silently() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 3, 1000));
        cart.set_quantity(&ProductId::new("p1"), &Size::new("42"), 0);
        assert_eq!(quantity_at(&cart, "p1", "42"), Some(3));
    }

    #[test]
    fn test_change_size_in_place_preserves_position() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.add_line(line("p2", "42", 1, 2000));

        cart.change_size(&ProductId::new("p1"), &Size::new("42"), Size::new("43"));

        let first = cart.lines().first().unwrap();
        assert_eq!(first.product_id, ProductId::new("p1"));
        assert_eq!(first.size, Size::new("43"));
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_change_size_merges_into_existing_destination() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 2, 1000));
        cart.add_line(line("p1", "43", 3, 1000));

        cart.change_size(&ProductId::new("p1"), &Size::new("42"), Size::new("43"));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(quantity_at(&cart, "p1", "43"), Some(5));
        assert_eq!(quantity_at(&cart, "p1", "42"), None);
    }

    #[test]
    fn test_change_size_to_same_size_is_stable() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 2, 1000));
        cart.change_size(&ProductId::new("p1"), &Size::new("42"), Size::new("42"));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(quantity_at(&cart, "p1", "42"), Some(2));
    }

    #[test]
    fn test_change_size_absent_source_is_noop() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.change_size(&ProductId::new("p9"), &Size::new("42"), Size::new("43"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 1, 1000));
        cart.add_line(line("p2", "43", 1, 2000));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_totals_recompute_on_every_read() {
        let mut cart = manager();
        cart.add_line(line("p1", "42", 2, 1500)); // $30.00
        cart.add_line(line("p2", "43", 1, 2050)); // $20.50
        assert_eq!(cart.total_price(), Price::from_cents(5050).unwrap());
        assert_eq!(cart.item_count(), 3);

        cart.set_quantity(&ProductId::new("p1"), &Size::new("42"), 1);
        assert_eq!(cart.total_price(), Price::from_cents(3550).unwrap());
        assert_eq!(cart.item_count(), 2);
    }

    // The end-to-end sequence from the product scenario: accumulate, reject
    // a zero-quantity update, then remove.
    #[test]
    fn test_accumulate_reject_remove_scenario() {
        let mut cart = manager();

        cart.add_line(line("p1", "42", 1, 100_000));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_price(), Price::from_cents(100_000).unwrap());

        cart.add_line(line("p1", "42", 2, 100_000));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(quantity_at(&cart, "p1", "42"), Some(3));
        assert_eq!(cart.total_price(), Price::from_cents(300_000).unwrap());

        cart.set_quantity(&ProductId::new("p1"), &Size::new("42"), 0);
        assert_eq!(quantity_at(&cart, "p1", "42"), Some(3));

        cart.remove_line(&ProductId::new("p1"), &Size::new("42"));
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_mutations_before_init_never_write() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
        assert!(!cart.is_initialized());

        cart.add_line(line("p1", "42", 1, 1000));
        assert_eq!(store.get("cart").unwrap(), None);

        // init replaces in-memory state wholesale from the (empty) store.
        cart.init(&IdentitySnapshot::guest());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_loading_snapshot_defers_lifecycle() {
        let mut cart = CartManager::new(Arc::new(MemoryStore::new()));
        cart.init(&IdentitySnapshot::Loading);
        assert!(!cart.is_initialized());
    }

    #[test]
    fn test_dispose_drops_state_without_writing() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
        cart.init(&IdentitySnapshot::guest());
        cart.add_line(line("p1", "42", 1, 1000));

        let before = store.get("cart").unwrap();
        cart.dispose();
        assert!(!cart.is_initialized());
        assert!(cart.is_empty());
        assert_eq!(store.get("cart").unwrap(), before);
    }

    #[test]
    fn test_write_through_after_every_mutation() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
        cart.init(&IdentitySnapshot::user("u1"));

        cart.add_line(line("p1", "42", 1, 1000));
        let stored: Vec<CartLine> =
            serde_json::from_str(&store.get("cart_u1").unwrap().unwrap()).unwrap();
        assert_eq!(stored, cart.lines());

        cart.set_quantity(&ProductId::new("p1"), &Size::new("42"), 4);
        let stored: Vec<CartLine> =
            serde_json::from_str(&store.get("cart_u1").unwrap().unwrap()).unwrap();
        assert_eq!(stored, cart.lines());
    }
}
