//! Cafe: the single record type managed by the service.

use crate::id::CafeId;

/// A persisted cafe.
///
/// `name` is unique across all records. `seats` is free text, not a number.
/// Text columns carry storage length caps (250, or 500 for the URLs) that
/// the application never checks itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    pub id: CafeId,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl Cafe {
    /// Create a builder for a not-yet-persisted [`NewCafe`].
    #[must_use]
    pub fn builder() -> NewCafeBuilder {
        NewCafeBuilder::default()
    }
}

/// A candidate record that has not been assigned an id yet.
///
/// Required text columns stay optional here: the store's `NOT NULL`
/// constraints decide whether the candidate is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCafe {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl NewCafe {
    /// Attach the storage-assigned id.
    ///
    /// Returns `None` if any required column is still missing.
    #[must_use]
    pub fn into_cafe(self, id: CafeId) -> Option<Cafe> {
        Some(Cafe {
            id,
            name: self.name?,
            map_url: self.map_url?,
            img_url: self.img_url?,
            location: self.location?,
            seats: self.seats?,
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls: self.can_take_calls,
            coffee_price: self.coffee_price,
        })
    }
}

/// Interpret a raw form value as a flag.
///
/// Absent or empty is `false`; any other text, including `"false"` and
/// `"0"`, is `true`.
#[must_use]
pub fn flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.is_empty())
}

/// Step-by-step builder for [`NewCafe`].
///
/// Every setter accepts the raw, possibly absent, value so that untrusted
/// input can be passed straight through. Nothing is validated here.
#[derive(Debug, Default)]
pub struct NewCafeBuilder {
    inner: NewCafe,
}

impl NewCafeBuilder {
    #[must_use]
    pub fn name(mut self, name: Option<String>) -> Self {
        self.inner.name = name;
        self
    }

    #[must_use]
    pub fn map_url(mut self, map_url: Option<String>) -> Self {
        self.inner.map_url = map_url;
        self
    }

    #[must_use]
    pub fn img_url(mut self, img_url: Option<String>) -> Self {
        self.inner.img_url = img_url;
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.inner.location = location;
        self
    }

    #[must_use]
    pub fn seats(mut self, seats: Option<String>) -> Self {
        self.inner.seats = seats;
        self
    }

    #[must_use]
    pub fn has_toilet(mut self, raw: Option<&str>) -> Self {
        self.inner.has_toilet = flag(raw);
        self
    }

    #[must_use]
    pub fn has_wifi(mut self, raw: Option<&str>) -> Self {
        self.inner.has_wifi = flag(raw);
        self
    }

    #[must_use]
    pub fn has_sockets(mut self, raw: Option<&str>) -> Self {
        self.inner.has_sockets = flag(raw);
        self
    }

    #[must_use]
    pub fn can_take_calls(mut self, raw: Option<&str>) -> Self {
        self.inner.can_take_calls = flag(raw);
        self
    }

    #[must_use]
    pub fn coffee_price(mut self, coffee_price: Option<String>) -> Self {
        self.inner.coffee_price = coffee_price;
        self
    }

    /// Consume the builder and return the candidate record.
    #[must_use]
    pub fn build(self) -> NewCafe {
        self.inner
    }
}
