/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  data.txt   "<scalar> <x> <y> <z>" per line
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  parse lines → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Sample>, file order
///   └──────────┘
/// ```

pub mod model;
pub mod reader;
