mod insight_provider;

pub use insight_provider::IInsightProvider;
