//! # Randomizer
//!
//! Random values for seed rows. Uniqueness is tracked per run in a
//! [`UniqueCache`] owned by the randomizer. Values already stored can be
//! reserved up front so a run on a seeded store avoids them.

use std::{
    collections::{HashMap, HashSet},
    ops::RangeInclusive,
};

use chrono::{DateTime, Months, NaiveDate, TimeDelta, Utc};
use fake::{
    Fake,
    faker::{
        address::en::{BuildingNumber, CityName, StreetName},
        internet::en::{FreeEmailProvider, Username},
        lorem::en::{Paragraph, Sentence, Word},
        name::en::{FirstName, LastName},
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index::sample};
use rust_decimal::Decimal;

/// Draws tried before a unique generator falls back to a numeric suffix.
pub const UNIQUE_ATTEMPTS: usize = 32;

/// Digits in a generated phone number.
pub const PHONE_DIGITS: usize = 13;

/// Kinds of value whose uniqueness is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueKind {
    Title,
    Slug,
    Username,
    Email,
}

/// Values already issued during the current run.
#[derive(Debug, Default, Clone)]
pub struct UniqueCache {
    issued: HashMap<UniqueKind, HashSet<String>>,
}

impl UniqueCache {
    pub fn new() -> Self { Self::default() }

    /// Records `value` and returns false if it was already issued.
    pub fn claim(&mut self, kind: UniqueKind, value: &str) -> bool {
        self.issued.entry(kind).or_default().insert(value.to_string())
    }

    /// Claims `base`, or the first free `base{sep}2`, `base{sep}3`, ...
    pub fn claim_with_suffix(&mut self, kind: UniqueKind, base: &str, sep: &str) -> String {
        if self.claim(kind, base) {
            return base.to_string();
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{}{}{}", base, sep, n);
            if self.claim(kind, &candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Marks values that already exist elsewhere as taken.
    pub fn reserve<I>(&mut self, kind: UniqueKind, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.issued.entry(kind).or_default().extend(values);
    }

    pub fn len(&self, kind: UniqueKind) -> usize { self.issued.get(&kind).map_or(0, HashSet::len) }
}

/// Username and email for a seeded login account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginIdentity {
    pub username: String,
    pub email:    String,
}

/// Turns text into a lowercase URL-safe slug.
///
/// # Example
///
/// ```
/// use migration::seeds::slugify;
///
/// assert_eq!(slugify("  Walnut Desk (Large) "), "walnut-desk-large");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|ch| {
            match ch {
                'a' ..= 'z' | '0' ..= '9' => ch,
                _ => '-',
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Source of random values for the seed generator.
///
/// Implementors only provide the RNG and the uniqueness cache; every value
/// generator has a default built on `fake`.
pub trait Randomizer {
    fn rng(&mut self) -> &mut StdRng;

    fn unique(&mut self) -> &mut UniqueCache;

    fn word(&mut self) -> String { Word().fake_with_rng(self.rng()) }

    /// A capitalized word; repeats are allowed.
    fn title(&mut self) -> String { capitalize(&self.word()) }

    /// A capitalized word not yet issued as a title in this run.
    fn unique_title(&mut self) -> String {
        for _ in 0 .. UNIQUE_ATTEMPTS {
            let candidate = capitalize(&self.word());
            if self.unique().claim(UniqueKind::Title, &candidate) {
                return candidate;
            }
        }
        let base = capitalize(&self.word());
        self.unique().claim_with_suffix(UniqueKind::Title, &base, " ")
    }

    /// Slug of `title`, suffixed with `-2`, `-3`, ... when already taken.
    fn unique_slug(&mut self, title: &str) -> String {
        let mut base = slugify(title);
        if base.is_empty() {
            base = "item".to_string();
        }
        self.unique().claim_with_suffix(UniqueKind::Slug, &base, "-")
    }

    fn sentence(&mut self) -> String { Sentence(3 .. 8).fake_with_rng(self.rng()) }

    /// Lorem text cut to at most `max_chars` characters.
    fn text(&mut self, max_chars: usize) -> String {
        let paragraph: String = Paragraph(1 .. 3).fake_with_rng(self.rng());
        paragraph
            .chars()
            .take(max_chars)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn first_name(&mut self) -> String { FirstName().fake_with_rng(self.rng()) }

    fn last_name(&mut self) -> String { LastName().fake_with_rng(self.rng()) }

    fn street(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(self.rng());
        let name: String = StreetName().fake_with_rng(self.rng());
        format!("{} {}", number, name)
    }

    fn city(&mut self) -> String { CityName().fake_with_rng(self.rng()) }

    /// Numeric phone number, never longer than [`PHONE_DIGITS`].
    fn phone(&mut self) -> String {
        let rng = self.rng();
        let first = char::from(b'1' + rng.random_range(0 .. 9u8));
        std::iter::once(first)
            .chain((1 .. PHONE_DIGITS).map(|_| char::from(b'0' + rng.random_range(0 .. 10u8))))
            .collect()
    }

    /// Email built from a random username, unique within this run.
    fn unique_email(&mut self) -> String {
        let username = self.unique_username();
        self.email_for(&username)
    }

    /// Unique username and matching unique email for a login account.
    fn login_identity(&mut self) -> LoginIdentity {
        let username = self.unique_username();
        let email = self.email_for(&username);
        LoginIdentity {
            username,
            email,
        }
    }

    fn unique_username(&mut self) -> String {
        for _ in 0 .. UNIQUE_ATTEMPTS {
            let candidate: String = Username().fake_with_rng(self.rng());
            if self.unique().claim(UniqueKind::Username, &candidate) {
                return candidate;
            }
        }
        let base: String = Username().fake_with_rng(self.rng());
        self.unique().claim_with_suffix(UniqueKind::Username, &base, "")
    }

    fn email_for(&mut self, username: &str) -> String {
        let provider: String = FreeEmailProvider().fake_with_rng(self.rng());
        let mut candidate = format!("{}@{}", username, provider);
        let mut n = 1usize;
        while !self.unique().claim(UniqueKind::Email, &candidate) {
            n += 1;
            candidate = format!("{}{}@{}", username, n, provider);
        }
        candidate
    }

    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32 { self.rng().random_range(range) }

    /// Uniform price with two decimal places, both bounds inclusive.
    fn decimal_in(&mut self, low: Decimal, high: Decimal) -> Decimal {
        let (mut low, mut high) = (low, high);
        low.rescale(2);
        high.rescale(2);
        let cents = self.rng().random_range(low.mantissa() ..= high.mantissa());
        Decimal::from_i128_with_scale(cents, 2)
    }

    /// Uniform fraction rounded to two decimal places and kept within bounds.
    fn discount_in(&mut self, low: f64, high: f64) -> f64 {
        let raw = self.rng().random_range(low ..= high);
        ((raw * 100.0).round() / 100.0).clamp(low, high)
    }

    /// Birth date for someone aged between `min_age` and `max_age` on `today`.
    fn date_of_birth(&mut self, today: NaiveDate, min_age: u32, max_age: u32) -> NaiveDate {
        let latest = today
            .checked_sub_months(Months::new(12 * min_age))
            .unwrap_or(today);
        let earliest = today
            .checked_sub_months(Months::new(12 * (max_age + 1)))
            .and_then(|d| d.succ_opt())
            .unwrap_or(latest);
        let span = (latest - earliest).num_days().max(0);
        earliest + TimeDelta::days(self.rng().random_range(0 ..= span))
    }

    /// Instant up to `max_days` days before `now`.
    fn past_instant(&mut self, now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
        let offset = self.rng().random_range(0 ..= max_days * 86_400);
        now - TimeDelta::seconds(offset)
    }

    /// Uniform index into a non-empty collection of `len` items.
    fn choose_index(&mut self, len: usize) -> usize { self.rng().random_range(0 .. len) }

    /// `amount` distinct indices below `len`, capped at `len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        sample(self.rng(), len, amount.min(len)).into_vec()
    }
}

/// Randomizer backed by `fake` and a standard RNG.
#[derive(Debug)]
pub struct FakeRandomizer {
    rng:    StdRng,
    unique: UniqueCache,
}

impl FakeRandomizer {
    pub fn new() -> Self { Self::with_rng(StdRng::from_os_rng()) }

    /// Reproducible randomizer; equal seeds give equal data.
    pub fn seeded(seed: u64) -> Self { Self::with_rng(StdRng::seed_from_u64(seed)) }

    pub fn from_seed(seed: Option<u64>) -> Self { seed.map_or_else(Self::new, Self::seeded) }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            unique: UniqueCache::new(),
        }
    }
}

impl Default for FakeRandomizer {
    fn default() -> Self { Self::new() }
}

impl Randomizer for FakeRandomizer {
    fn rng(&mut self) -> &mut StdRng { &mut self.rng }

    fn unique(&mut self) -> &mut UniqueCache { &mut self.unique }
}
