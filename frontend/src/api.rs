use seed::prelude::*;
use serde::de::DeserializeOwned;
use shared::{CitiesResponse, City, OptimizationResult, OptimizeRequest};

use crate::error::FetchFailure;

pub async fn fetch_cities(api_root: String) -> Result<Vec<City>, FetchFailure> {
    let request = Request::new(format!("{api_root}/cities")).method(Method::Get);
    let body: CitiesResponse = send(request).await?;
    Ok(body.cities)
}

pub async fn optimize(
    api_root: String,
    payload: OptimizeRequest,
) -> Result<OptimizationResult, FetchFailure> {
    let request = Request::new(format!("{api_root}/optimize"))
        .method(Method::Post)
        .json(&payload)
        .map_err(|err| FetchFailure::Build(format!("{err:?}")))?;
    send(request).await
}

async fn send<T: DeserializeOwned + 'static>(request: Request<'_>) -> Result<T, FetchFailure> {
    let raw = request
        .fetch()
        .await
        .map_err(|err| FetchFailure::Network(format!("{err:?}")))?;
    let response = raw
        .check_status()
        .map_err(|err| FetchFailure::Status(format!("{err:?}")))?;
    response
        .json::<T>()
        .await
        .map_err(|err| FetchFailure::Payload(format!("{err:?}")))
}
