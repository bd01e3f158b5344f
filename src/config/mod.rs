pub mod schema;

pub use schema::{
    BrowserConfig, Config, LiveSelectors, PredictionConfig, Selectors, Speed, TableConfig,
    Viewport, WatchConfig,
};
