mod font_metrics;

pub use font_metrics::FontMetrics;
