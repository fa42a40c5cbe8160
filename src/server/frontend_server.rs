use crate::api::{FrontendError, FrontendService};
use crate::grpc::grpc_frontend_server::GrpcFrontend;
use crate::grpc::{
    ProtoAck, ProtoDrawResult, ProtoEventQueryReq, ProtoEventUpdateReq, ProtoGetLotteryWinnerReq, ProtoPayloadResult,
    ProtoRegisterSubscriptionReq, ProtoTallyQueryReq,
};
use crate::replica::draw_outcome_to_proto;
use bytes::Bytes;
use tonic::{Request, Response, Status};

/// FrontendRpcServer is the client-facing gRPC interface of a frontend replica.
pub struct FrontendRpcServer {
    logger: slog::Logger,
    frontend: FrontendService,
}

impl FrontendRpcServer {
    pub(crate) fn new(logger: slog::Logger, frontend: FrontendService) -> Self {
        FrontendRpcServer { logger, frontend }
    }

    fn convert_payload_result(app_result: Result<Option<Bytes>, FrontendError>) -> Result<ProtoPayloadResult, Status> {
        match app_result {
            Ok(Some(payload)) => Ok(ProtoPayloadResult {
                found: true,
                payload: payload.to_vec(),
            }),
            Ok(None) => Ok(ProtoPayloadResult {
                found: false,
                payload: Vec::new(),
            }),
            Err(e) => Err(Self::convert_frontend_error(e)),
        }
    }

    fn convert_frontend_error(e: FrontendError) -> Status {
        match e {
            FrontendError::Backend(e) => Status::unavailable(e.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl GrpcFrontend for FrontendRpcServer {
    async fn get_results(&self, request: Request<ProtoEventQueryReq>) -> Result<Response<ProtoPayloadResult>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let app_result = self
            .frontend
            .get_results(&rpc_request.client_id, &rpc_request.event_name)
            .await;
        Self::convert_payload_result(app_result).map(Response::new)
    }

    async fn get_current_scores(
        &self,
        request: Request<ProtoEventQueryReq>,
    ) -> Result<Response<ProtoPayloadResult>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let app_result = self
            .frontend
            .get_current_scores(&rpc_request.client_id, &rpc_request.event_name)
            .await;
        Self::convert_payload_result(app_result).map(Response::new)
    }

    async fn get_medal_tally(&self, request: Request<ProtoTallyQueryReq>) -> Result<Response<ProtoPayloadResult>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let app_result = self
            .frontend
            .get_medal_tally(&rpc_request.client_id, &rpc_request.team_name)
            .await;
        Self::convert_payload_result(app_result).map(Response::new)
    }

    async fn register_subscription(
        &self,
        request: Request<ProtoRegisterSubscriptionReq>,
    ) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        self.frontend
            .register_subscription(
                &rpc_request.client_id,
                &rpc_request.client_host,
                &rpc_request.event_name,
            )
            .await
            .map_err(Self::convert_frontend_error)?;

        Ok(Response::new(ProtoAck {}))
    }

    async fn get_lottery_winner(
        &self,
        request: Request<ProtoGetLotteryWinnerReq>,
    ) -> Result<Response<ProtoDrawResult>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        match self.frontend.get_lottery_winner(&rpc_request.client_id).await {
            Some(outcome) => Ok(Response::new(draw_outcome_to_proto(&outcome))),
            None => Err(Status::failed_precondition("Lottery has not been drawn yet")),
        }
    }

    async fn update_current_scores(&self, request: Request<ProtoEventUpdateReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        self.frontend
            .update_current_scores(&rpc_request.event_name, Bytes::from(rpc_request.payload))
            .await
            .map_err(Self::convert_frontend_error)?;

        Ok(Response::new(ProtoAck {}))
    }

    async fn update_results(&self, request: Request<ProtoEventUpdateReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        self.frontend
            .update_results(&rpc_request.event_name, Bytes::from(rpc_request.payload))
            .await
            .map_err(Self::convert_frontend_error)?;

        Ok(Response::new(ProtoAck {}))
    }
}
