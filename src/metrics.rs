use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("image_gateway_requests_total", "Total number of generate requests").unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("image_gateway_cache_hits_total", "Total cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("image_gateway_cache_misses_total", "Total cache misses").unwrap();
    pub static ref GENERATION_FAILURES: Counter = register_counter!(
        "image_gateway_generation_failures_total",
        "Total failed calls to the image API"
    )
    .unwrap();
    pub static ref GENERATION_LATENCY: Histogram = register_histogram!(
        "image_gateway_generation_latency_seconds",
        "Image API call latency in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("image_gateway_cache_size", "Current number of entries in cache, stale included").unwrap();
}
