use napi_derive::napi;

#[napi(object)]
#[derive(Clone, Debug)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct SolverOptions {
    pub max_exact_cities: Option<u32>,
    /// "contiguous" (default) or "round-robin".
    pub partition_mode: Option<String>,
    /// Allowed |D[i][j] - D[j][i]| for explicit distance rows.
    pub symmetry_tolerance: Option<f64>,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct TourResult {
    pub path: Vec<u32>,
    pub cost: f64,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct AgentRouteResult {
    pub stops: Vec<u32>,
    pub distance: f64,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct MtspSolution {
    pub routes: Vec<AgentRouteResult>,
    pub total_distance: f64,
}
