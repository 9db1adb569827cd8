use crate::eaw::{Category, RangeRecord};

/// Number of 64-bit words in the table.
pub const WORDS: usize = 1024;
/// Highest code point the table can represent.
pub const MAX_CODEPOINT: u32 = (WORDS * 64 - 1) as u32;

/// One bit per BMP code point: bit `cp % 64` of word `cp / 64` is set
/// if the code point is Fullwidth or Wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthBitmap {
    words: Box<[u64; WORDS]>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub records: usize,
    pub full_size_records: usize,
    pub truncated: u64,
    pub unrecognized: usize,
}

impl Default for WidthBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthBitmap {
    pub fn new() -> Self {
        Self { words: Box::new([0; WORDS]) }
    }

    /// Folds all `records` into a fresh bitmap.
    pub fn build<'a, I>(records: I) -> (Self, BuildStats)
    where
        I: IntoIterator<Item = &'a RangeRecord>,
    {
        let mut bitmap = Self::new();
        let mut stats = BuildStats::default();

        for record in records {
            stats.records += 1;
            if let Category::Unrecognized(_) = record.category {
                stats.unrecognized += 1;
            }
            if record.category.is_full_size() {
                stats.full_size_records += 1;
            }
            stats.truncated += bitmap.fold(record);
        }

        (bitmap, stats)
    }

    /// Sets the bits of every in-table code point covered by `record`, if it's
    /// Fullwidth or Wide. Returns the number of covered code points above the table.
    pub fn fold(&mut self, record: &RangeRecord) -> u64 {
        if !record.category.is_full_size() || record.start > record.end {
            return 0;
        }

        let mut truncated = 0;
        if record.end > MAX_CODEPOINT {
            let first_outside = record.start.max(MAX_CODEPOINT + 1);
            truncated = (record.end - first_outside) as u64 + 1;
        }

        if record.start <= MAX_CODEPOINT {
            for cp in record.start..=record.end.min(MAX_CODEPOINT) {
                self.set(cp);
            }
        }

        truncated
    }

    fn set(&mut self, cp: u32) {
        debug_assert!(cp <= MAX_CODEPOINT);
        let cp = cp as usize;
        self.words[cp / 64] |= 1u64 << (cp % 64);
    }

    /// Code points above the table are never full size.
    pub fn is_full_size(&self, cp: u32) -> bool {
        if cp > MAX_CODEPOINT {
            return false;
        }
        let cp = cp as usize;
        (self.words[cp / 64] >> (cp % 64)) & 1 != 0
    }

    pub fn words(&self) -> &[u64; WORDS] {
        &self.words
    }

    /// Number of bits that are set.
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }
}
