pub const LIVENESS: &str = "RoofSched Bot Running";

pub async fn health() -> &'static str {
    LIVENESS
}
