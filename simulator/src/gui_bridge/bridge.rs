use crate::generator::profile::{build_survey_from_config, GeneratorConfig, SurveyLine};
use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::runner::Runner;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use swathcore::SwathRecord;
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

fn store(state: &RwLock<VisualizationModel>, model: VisualizationModel) {
    let mut guard = state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = model;
}

/// Bridge that serves decimated swath edges over HTTP and decimates
/// incoming survey lines.
pub struct GuiBridge {
    state: Arc<RwLock<VisualizationModel>>,
}

/// HTTP routes: `GET /swath`, `POST /ingest` (JSON array of records forming
/// one line) and `POST /ingest-config` (generator config).
fn routes(
    state: Arc<RwLock<VisualizationModel>>,
    runner: Arc<Runner>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let get_route = warp::path("swath")
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: Arc<RwLock<VisualizationModel>>| {
            let guard = state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            warp::reply::json(&*guard)
        });

    let post_route = warp::path("ingest")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and(runner_filter.clone())
        .and_then(
            |records: Vec<SwathRecord>,
             state: Arc<RwLock<VisualizationModel>>,
             runner: Arc<Runner>| async move {
                let line = SurveyLine { index: 0, records };
                match runner.execute(std::slice::from_ref(&line)) {
                    Ok(result) => {
                        let retained = result.retained_count();
                        store(&state, VisualizationModel::from_result(&result, None));
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({"status": "ok", "retained": retained})),
                            StatusCode::OK,
                        ))
                    }
                    Err(err) => {
                        log::error!("ingest error: {:#}", err);
                        Err(warp::reject::custom(WarpError))
                    }
                }
            },
        );

    let generator_route = warp::path("ingest-config")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter)
        .and(runner_filter)
        .and_then(
            |config: GeneratorConfig,
             state: Arc<RwLock<VisualizationModel>>,
             runner: Arc<Runner>| async move {
                match build_survey_from_config(&config).and_then(|survey| runner.execute(&survey))
                {
                    Ok(result) => {
                        if let Some(name) = config.scenario.as_ref() {
                            log::info!(
                                "scenario {} -> kept {} of {} records",
                                name,
                                result.retained_count(),
                                result.input_count()
                            );
                        }
                        let retained = result.retained_count();
                        store(
                            &state,
                            VisualizationModel::from_result(&result, config.scenario.clone()),
                        );
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "ok",
                                "retained": retained,
                                "description": config.description.clone().unwrap_or_default()
                            })),
                            StatusCode::OK,
                        ))
                    }
                    Err(err) => {
                        log::error!("ingest-config error: {:#}", err);
                        Err(warp::reject::custom(WarpError))
                    }
                }
            },
        );

    get_route.or(post_route).or(generator_route)
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(VisualizationModel::default()));
        let routes = routes(state.clone(), runner);

        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &VisualizationModel) {
        log::info!(
            "[bridge] lines: {}, retained records: {}",
            model.lines.len(),
            model.retained_count
        );
        store(&self.state, model.clone());
    }

    pub fn publish_status(&self, message: &str) {
        log::info!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_survey;
    use crate::workflow::config::WorkflowConfig;
    use swathcore::Side;

    #[test]
    fn gui_bridge_updates_state() {
        let cfg = WorkflowConfig::from_args(10.0, Side::Starboard, 0.0);
        let runner = Arc::new(Runner::new(cfg));
        let gui = GuiBridge::new(runner.clone());
        let survey = build_survey(1, 50.0).unwrap();
        let result = runner.execute(&survey).unwrap();

        gui.publish(&VisualizationModel::from_result(&result, None));
        assert_eq!(gui.snapshot().retained_count, result.retained_count());
        assert_eq!(gui.snapshot().lines.len(), 1);
    }

    fn test_routes() -> (
        Arc<RwLock<VisualizationModel>>,
        impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone,
    ) {
        let cfg = WorkflowConfig::from_args(10.0, Side::Starboard, 0.0);
        let state = Arc::new(RwLock::new(VisualizationModel::default()));
        let filter = routes(state.clone(), Arc::new(Runner::new(cfg)));
        (state, filter)
    }

    #[tokio::test]
    async fn ingest_accepts_record_array_as_one_line() {
        let (state, filter) = test_routes();
        let survey = build_survey(1, 50.0).unwrap();
        let records = survey[0].records.clone();

        let response = warp::test::request()
            .method("POST")
            .path("/ingest")
            .json(&records)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "ok");

        let model = state.read().unwrap().clone();
        assert_eq!(model.lines.len(), 1);
        assert_eq!(model.lines[0].line, 0);
        assert_eq!(model.input_count, records.len());
        assert_eq!(body["retained"], model.retained_count);
    }

    #[tokio::test]
    async fn ingest_rejects_line_object() {
        let (_state, filter) = test_routes();
        let survey = build_survey(1, 50.0).unwrap();

        let response = warp::test::request()
            .method("POST")
            .path("/ingest")
            .json(&survey[0])
            .reply(&filter)
            .await;

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn swath_route_serves_latest_model() {
        let (state, filter) = test_routes();
        store(
            &state,
            VisualizationModel {
                retained_count: 7,
                ..Default::default()
            },
        );

        let response = warp::test::request()
            .method("GET")
            .path("/swath")
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["retained_count"], 7);
    }
}
