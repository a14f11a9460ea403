pub mod cache;
pub mod case;
pub mod context;
pub mod dictionary;
pub mod fallback;
pub mod lang;
pub mod normalizer;
pub mod restorer;
pub mod source;
pub mod stage;
pub mod tokenize;
pub mod unicode;

pub use cache::RestorationCache;
pub use case::{CasePattern, apply_case};
pub use context::Context;
pub use dictionary::{Dictionary, DictionaryEntry, DictionaryLoadError, LoadStats};
pub use fallback::{FallbackStrategy, SuffixMatcher};
pub use lang::Lang;
pub use lang::data::{
    CAT, CES, DAN, DEU, ENG, EST, FIN, FRA, HRV, HUN, ISL, ITA, LAV, LIT, NOR, POL, POR, RON, SLK,
    SLV, SPA, SRP, SWE, TUR, VIE,
};
pub use lang::mapping::{CharMapping, MappingError, MappingOverride, ReverseMapping};
pub use normalizer::{Normalizer, remove_diacritics, remove_diacritics_default};
pub use restorer::{EngineState, RestoreError, Restorer, RestorerBuilder, RestorerConfig};
pub use source::{DictionaryPaths, DictionarySource, MemoryDictionaries};
pub use stage::{LowerCase, RemoveDiacritics, Stage, Transliterate};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
