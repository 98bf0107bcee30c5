// This file is part of arb-bindings.
//
// arb-bindings is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// arb-bindings is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with arb-bindings.
// If not, see https://www.gnu.org/licenses/.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::{TransportError, TransportFut};
use pin_project::pin_project;
use tokio::time::Sleep;
use tower::{Layer, Service};

/// Applies a client side timeout to requests via the supplied inner service.
#[derive(Debug, Clone)]
pub(crate) struct ProviderTimeoutLayer {
    timeout: Duration,
}

impl ProviderTimeoutLayer {
    /// Create a timeout from a duration
    pub(crate) fn new(timeout: Duration) -> Self {
        ProviderTimeoutLayer { timeout }
    }
}

impl<S> Layer<S> for ProviderTimeoutLayer
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError> + Sync,
{
    type Service = ProviderTimeout<S>;

    fn layer(&self, service: S) -> Self::Service {
        ProviderTimeout::new(service, self.timeout)
    }
}

/// Transport that fails requests the inner transport does not answer in time.
#[derive(Debug)]
pub struct ProviderTimeout<S> {
    service: S,
    timeout: Duration,
}

impl<S> ProviderTimeout<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError> + Sync,
{
    /// Creates a new [`ProviderTimeout`]
    pub const fn new(service: S, timeout: Duration) -> Self {
        ProviderTimeout { service, timeout }
    }
}

impl<S> Clone for ProviderTimeout<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S> Service<RequestPacket> for ProviderTimeout<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Sync
        + Send
        + Clone
        + 'static,
    S::Future: Send + 'static,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    // boxed so the stack is usable as an alloy transport
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let response = self.service.call(request);
        let sleep = tokio::time::sleep(self.timeout);
        Box::pin(ResponseFuture::new(response, sleep))
    }
}

#[pin_project]
#[derive(Debug)]
struct ResponseFuture<T> {
    #[pin]
    response: T,
    #[pin]
    sleep: Sleep,
}

impl<T> ResponseFuture<T> {
    fn new(response: T, sleep: Sleep) -> Self {
        ResponseFuture { response, sleep }
    }
}

impl<F, T> Future for ResponseFuture<F>
where
    F: Future<Output = Result<T, TransportError>>,
{
    type Output = Result<T, TransportError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        // the response wins if both are ready
        if let Poll::Ready(v) = this.response.poll(cx) {
            return Poll::Ready(v);
        }
        match this.sleep.poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(_) => Poll::Ready(Err(TransportError::local_usage_str(
                "provider request timeout from client side",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future;

    use tower::service_fn;

    use super::*;

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let inner = service_fn(|_request: RequestPacket| async {
            future::pending::<Result<ResponsePacket, TransportError>>().await
        });
        let mut service = ProviderTimeoutLayer::new(Duration::from_millis(10)).layer(inner);

        let err = service
            .call(RequestPacket::Batch(vec![]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn test_fast_request_passes() {
        let inner = service_fn(|_request: RequestPacket| async {
            Ok::<_, TransportError>(ResponsePacket::Batch(vec![]))
        });
        let mut service = ProviderTimeoutLayer::new(Duration::from_secs(10)).layer(inner);

        let response = service.call(RequestPacket::Batch(vec![])).await.unwrap();
        assert!(matches!(response, ResponsePacket::Batch(b) if b.is_empty()));
    }
}
