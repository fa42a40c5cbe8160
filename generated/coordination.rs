/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoAck {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoStartElectionReq {
    /// Negative means "initiated locally" (lower than any valid replica id).
    #[prost(int64, tag = "1")]
    pub caller_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNotifyAliveReq {
    #[prost(uint32, tag = "1")]
    pub sender_id: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNotifyVictoryReq {
    #[prost(string, tag = "1")]
    pub leader_name: ::prost::alloc::string::String,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetTimeReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetTimeResult {
    #[prost(int64, tag = "1")]
    pub time_ms: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSetClockOffsetReq {
    #[prost(int64, tag = "1")]
    pub offset_ms: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNotifyTimeStampReq {
    #[prost(uint64, tag = "1")]
    pub clock: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNotifyTimeStampResult {
    #[prost(uint64, tag = "1")]
    pub merged_clock: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoAddParticipantReq {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSetLotteryEnterFrequencyReq {
    /// Negative means "administrative call", which is re-broadcast to peers.
    #[prost(int64, tag = "1")]
    pub caller_id: i64,
    #[prost(uint64, tag = "2")]
    pub frequency: u64,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoFreezeLotteryReq {}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoConductLotteryReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDrawResult {
    #[prost(bool, tag = "1")]
    pub has_winner: bool,
    #[prost(string, tag = "2")]
    pub winner_id: ::prost::alloc::string::String,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetLoadStatisticsReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetLoadStatisticsResult {
    #[prost(double, repeated, tag = "1")]
    pub loads: ::prost::alloc::vec::Vec<f64>,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetRequestCountReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetRequestCountResult {
    #[prost(uint64, tag = "1")]
    pub request_count: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoEventQueryReq {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub event_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTallyQueryReq {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub team_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPayloadResult {
    #[prost(bool, tag = "1")]
    pub found: bool,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoRegisterSubscriptionReq {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub client_host: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub event_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetLotteryWinnerReq {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoEventUpdateReq {
    #[prost(string, tag = "1")]
    pub event_name: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoServerDetail {
    #[prost(string, tag = "1")]
    pub role: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub replica_id: u32,
    #[prost(string, tag = "3")]
    pub ip_addr: ::prost::alloc::string::String,
    #[prost(uint32, tag = "4")]
    pub port: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLookupReq {
    #[prost(string, tag = "1")]
    pub role: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLookupAllResult {
    #[prost(message, repeated, tag = "1")]
    pub servers: ::prost::alloc::vec::Vec<ProtoServerDetail>,
}
#[doc = r" Generated client implementations."]
pub mod grpc_replica_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct GrpcReplicaClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GrpcReplicaClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GrpcReplicaClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        #[doc = " Bully election"]
        pub async fn start_election(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoStartElectionReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/StartElection");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn notify_alive(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoNotifyAliveReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/NotifyAlive");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn notify_victory(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoNotifyVictoryReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/NotifyVictory");
            self.inner.unary(request.into_request(), path, codec).await
        }
        #[doc = " Berkeley clock sync"]
        pub async fn get_time(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGetTimeReq>,
        ) -> Result<tonic::Response<super::ProtoGetTimeResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/GetTime");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn set_clock_offset(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoSetClockOffsetReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/SetClockOffset");
            self.inner.unary(request.into_request(), path, codec).await
        }
        #[doc = " Ordered admission + lottery"]
        pub async fn notify_time_stamp(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoNotifyTimeStampReq>,
        ) -> Result<tonic::Response<super::ProtoNotifyTimeStampResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/NotifyTimeStamp");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn add_participant(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoAddParticipantReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/AddParticipant");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn set_lottery_enter_frequency(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoSetLotteryEnterFrequencyReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/coordination.GrpcReplica/SetLotteryEnterFrequency",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn freeze_lottery(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoFreezeLotteryReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/FreezeLottery");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn conduct_lottery(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoConductLotteryReq>,
        ) -> Result<tonic::Response<super::ProtoDrawResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/ConductLottery");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn announce_winner(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoDrawResult>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/AnnounceWinner");
            self.inner.unary(request.into_request(), path, codec).await
        }
        #[doc = " Diagnostics"]
        pub async fn get_load_statistics(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGetLoadStatisticsReq>,
        ) -> Result<tonic::Response<super::ProtoGetLoadStatisticsResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/GetLoadStatistics");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_request_count(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGetRequestCountReq>,
        ) -> Result<tonic::Response<super::ProtoGetRequestCountResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcReplica/GetRequestCount");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for GrpcReplicaClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for GrpcReplicaClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "GrpcReplicaClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod grpc_frontend_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct GrpcFrontendClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GrpcFrontendClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GrpcFrontendClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn get_results(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoEventQueryReq>,
        ) -> Result<tonic::Response<super::ProtoPayloadResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcFrontend/GetResults");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_current_scores(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoEventQueryReq>,
        ) -> Result<tonic::Response<super::ProtoPayloadResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcFrontend/GetCurrentScores");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_medal_tally(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoTallyQueryReq>,
        ) -> Result<tonic::Response<super::ProtoPayloadResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcFrontend/GetMedalTally");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn register_subscription(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoRegisterSubscriptionReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/coordination.GrpcFrontend/RegisterSubscription",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_lottery_winner(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGetLotteryWinnerReq>,
        ) -> Result<tonic::Response<super::ProtoDrawResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcFrontend/GetLotteryWinner");
            self.inner.unary(request.into_request(), path, codec).await
        }
        #[doc = " Feed side"]
        pub async fn update_current_scores(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoEventUpdateReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/coordination.GrpcFrontend/UpdateCurrentScores",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn update_results(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoEventUpdateReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcFrontend/UpdateResults");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for GrpcFrontendClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for GrpcFrontendClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "GrpcFrontendClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod grpc_registry_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct GrpcRegistryClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GrpcRegistryClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GrpcRegistryClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn register(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoServerDetail>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coordination.GrpcRegistry/Register");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn lookup(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoLookupReq>,
        ) -> Result<tonic::Response<super::ProtoServerDetail>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coordination.GrpcRegistry/Lookup");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn lookup_all(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoLookupReq>,
        ) -> Result<tonic::Response<super::ProtoLookupAllResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coordination.GrpcRegistry/LookupAll");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for GrpcRegistryClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for GrpcRegistryClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "GrpcRegistryClient {{ ... }}")
        }
    }
}
#[doc = r" Generated server implementations."]
pub mod grpc_replica_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with GrpcReplicaServer."]
    #[async_trait]
    pub trait GrpcReplica: Send + Sync + 'static {
        #[doc = " Bully election"]
        async fn start_election(
            &self,
            request: tonic::Request<super::ProtoStartElectionReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn notify_alive(
            &self,
            request: tonic::Request<super::ProtoNotifyAliveReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn notify_victory(
            &self,
            request: tonic::Request<super::ProtoNotifyVictoryReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        #[doc = " Berkeley clock sync"]
        async fn get_time(
            &self,
            request: tonic::Request<super::ProtoGetTimeReq>,
        ) -> Result<tonic::Response<super::ProtoGetTimeResult>, tonic::Status>;
        async fn set_clock_offset(
            &self,
            request: tonic::Request<super::ProtoSetClockOffsetReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        #[doc = " Ordered admission + lottery"]
        async fn notify_time_stamp(
            &self,
            request: tonic::Request<super::ProtoNotifyTimeStampReq>,
        ) -> Result<tonic::Response<super::ProtoNotifyTimeStampResult>, tonic::Status>;
        async fn add_participant(
            &self,
            request: tonic::Request<super::ProtoAddParticipantReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn set_lottery_enter_frequency(
            &self,
            request: tonic::Request<super::ProtoSetLotteryEnterFrequencyReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn freeze_lottery(
            &self,
            request: tonic::Request<super::ProtoFreezeLotteryReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn conduct_lottery(
            &self,
            request: tonic::Request<super::ProtoConductLotteryReq>,
        ) -> Result<tonic::Response<super::ProtoDrawResult>, tonic::Status>;
        async fn announce_winner(
            &self,
            request: tonic::Request<super::ProtoDrawResult>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        #[doc = " Diagnostics"]
        async fn get_load_statistics(
            &self,
            request: tonic::Request<super::ProtoGetLoadStatisticsReq>,
        ) -> Result<tonic::Response<super::ProtoGetLoadStatisticsResult>, tonic::Status>;
        async fn get_request_count(
            &self,
            request: tonic::Request<super::ProtoGetRequestCountReq>,
        ) -> Result<tonic::Response<super::ProtoGetRequestCountResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct GrpcReplicaServer<T: GrpcReplica> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: GrpcReplica> GrpcReplicaServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for GrpcReplicaServer<T>
    where
        T: GrpcReplica,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/coordination.GrpcReplica/StartElection" => {
                    #[allow(non_camel_case_types)]
                    struct StartElectionSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoStartElectionReq>
                        for StartElectionSvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoStartElectionReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).start_election(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = StartElectionSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/NotifyAlive" => {
                    #[allow(non_camel_case_types)]
                    struct NotifyAliveSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoNotifyAliveReq> for NotifyAliveSvc<T> {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoNotifyAliveReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).notify_alive(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = NotifyAliveSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/NotifyVictory" => {
                    #[allow(non_camel_case_types)]
                    struct NotifyVictorySvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoNotifyVictoryReq>
                        for NotifyVictorySvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoNotifyVictoryReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).notify_victory(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = NotifyVictorySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/GetTime" => {
                    #[allow(non_camel_case_types)]
                    struct GetTimeSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoGetTimeReq> for GetTimeSvc<T> {
                        type Response = super::ProtoGetTimeResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGetTimeReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_time(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetTimeSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/SetClockOffset" => {
                    #[allow(non_camel_case_types)]
                    struct SetClockOffsetSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoSetClockOffsetReq>
                        for SetClockOffsetSvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoSetClockOffsetReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).set_clock_offset(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = SetClockOffsetSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/NotifyTimeStamp" => {
                    #[allow(non_camel_case_types)]
                    struct NotifyTimeStampSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoNotifyTimeStampReq>
                        for NotifyTimeStampSvc<T>
                    {
                        type Response = super::ProtoNotifyTimeStampResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoNotifyTimeStampReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).notify_time_stamp(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = NotifyTimeStampSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/AddParticipant" => {
                    #[allow(non_camel_case_types)]
                    struct AddParticipantSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoAddParticipantReq>
                        for AddParticipantSvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoAddParticipantReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).add_participant(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = AddParticipantSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/SetLotteryEnterFrequency" => {
                    #[allow(non_camel_case_types)]
                    struct SetLotteryEnterFrequencySvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica>
                        tonic::server::UnaryService<super::ProtoSetLotteryEnterFrequencyReq>
                        for SetLotteryEnterFrequencySvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoSetLotteryEnterFrequencyReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut =
                                async move { (*inner).set_lottery_enter_frequency(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = SetLotteryEnterFrequencySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/FreezeLottery" => {
                    #[allow(non_camel_case_types)]
                    struct FreezeLotterySvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoFreezeLotteryReq>
                        for FreezeLotterySvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoFreezeLotteryReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).freeze_lottery(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = FreezeLotterySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/ConductLottery" => {
                    #[allow(non_camel_case_types)]
                    struct ConductLotterySvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoConductLotteryReq>
                        for ConductLotterySvc<T>
                    {
                        type Response = super::ProtoDrawResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoConductLotteryReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).conduct_lottery(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ConductLotterySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/AnnounceWinner" => {
                    #[allow(non_camel_case_types)]
                    struct AnnounceWinnerSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoDrawResult> for AnnounceWinnerSvc<T> {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoDrawResult>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).announce_winner(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = AnnounceWinnerSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/GetLoadStatistics" => {
                    #[allow(non_camel_case_types)]
                    struct GetLoadStatisticsSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica>
                        tonic::server::UnaryService<super::ProtoGetLoadStatisticsReq>
                        for GetLoadStatisticsSvc<T>
                    {
                        type Response = super::ProtoGetLoadStatisticsResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGetLoadStatisticsReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_load_statistics(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetLoadStatisticsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcReplica/GetRequestCount" => {
                    #[allow(non_camel_case_types)]
                    struct GetRequestCountSvc<T: GrpcReplica>(pub Arc<T>);
                    impl<T: GrpcReplica> tonic::server::UnaryService<super::ProtoGetRequestCountReq>
                        for GetRequestCountSvc<T>
                    {
                        type Response = super::ProtoGetRequestCountResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGetRequestCountReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_request_count(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetRequestCountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: GrpcReplica> Clone for GrpcReplicaServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: GrpcReplica> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: GrpcReplica> tonic::transport::NamedService for GrpcReplicaServer<T> {
        const NAME: &'static str = "coordination.GrpcReplica";
    }
}
#[doc = r" Generated server implementations."]
pub mod grpc_frontend_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with GrpcFrontendServer."]
    #[async_trait]
    pub trait GrpcFrontend: Send + Sync + 'static {
        async fn get_results(
            &self,
            request: tonic::Request<super::ProtoEventQueryReq>,
        ) -> Result<tonic::Response<super::ProtoPayloadResult>, tonic::Status>;
        async fn get_current_scores(
            &self,
            request: tonic::Request<super::ProtoEventQueryReq>,
        ) -> Result<tonic::Response<super::ProtoPayloadResult>, tonic::Status>;
        async fn get_medal_tally(
            &self,
            request: tonic::Request<super::ProtoTallyQueryReq>,
        ) -> Result<tonic::Response<super::ProtoPayloadResult>, tonic::Status>;
        async fn register_subscription(
            &self,
            request: tonic::Request<super::ProtoRegisterSubscriptionReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn get_lottery_winner(
            &self,
            request: tonic::Request<super::ProtoGetLotteryWinnerReq>,
        ) -> Result<tonic::Response<super::ProtoDrawResult>, tonic::Status>;
        #[doc = " Feed side"]
        async fn update_current_scores(
            &self,
            request: tonic::Request<super::ProtoEventUpdateReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn update_results(
            &self,
            request: tonic::Request<super::ProtoEventUpdateReq>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct GrpcFrontendServer<T: GrpcFrontend> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: GrpcFrontend> GrpcFrontendServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for GrpcFrontendServer<T>
    where
        T: GrpcFrontend,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/coordination.GrpcFrontend/GetResults" => {
                    #[allow(non_camel_case_types)]
                    struct GetResultsSvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend> tonic::server::UnaryService<super::ProtoEventQueryReq> for GetResultsSvc<T> {
                        type Response = super::ProtoPayloadResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoEventQueryReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_results(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetResultsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcFrontend/GetCurrentScores" => {
                    #[allow(non_camel_case_types)]
                    struct GetCurrentScoresSvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend> tonic::server::UnaryService<super::ProtoEventQueryReq>
                        for GetCurrentScoresSvc<T>
                    {
                        type Response = super::ProtoPayloadResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoEventQueryReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_current_scores(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetCurrentScoresSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcFrontend/GetMedalTally" => {
                    #[allow(non_camel_case_types)]
                    struct GetMedalTallySvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend> tonic::server::UnaryService<super::ProtoTallyQueryReq>
                        for GetMedalTallySvc<T>
                    {
                        type Response = super::ProtoPayloadResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoTallyQueryReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_medal_tally(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetMedalTallySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcFrontend/RegisterSubscription" => {
                    #[allow(non_camel_case_types)]
                    struct RegisterSubscriptionSvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend>
                        tonic::server::UnaryService<super::ProtoRegisterSubscriptionReq>
                        for RegisterSubscriptionSvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoRegisterSubscriptionReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).register_subscription(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = RegisterSubscriptionSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcFrontend/GetLotteryWinner" => {
                    #[allow(non_camel_case_types)]
                    struct GetLotteryWinnerSvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend>
                        tonic::server::UnaryService<super::ProtoGetLotteryWinnerReq>
                        for GetLotteryWinnerSvc<T>
                    {
                        type Response = super::ProtoDrawResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGetLotteryWinnerReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_lottery_winner(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetLotteryWinnerSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcFrontend/UpdateCurrentScores" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateCurrentScoresSvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend> tonic::server::UnaryService<super::ProtoEventUpdateReq>
                        for UpdateCurrentScoresSvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoEventUpdateReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).update_current_scores(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = UpdateCurrentScoresSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcFrontend/UpdateResults" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateResultsSvc<T: GrpcFrontend>(pub Arc<T>);
                    impl<T: GrpcFrontend> tonic::server::UnaryService<super::ProtoEventUpdateReq>
                        for UpdateResultsSvc<T>
                    {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoEventUpdateReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).update_results(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = UpdateResultsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: GrpcFrontend> Clone for GrpcFrontendServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: GrpcFrontend> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: GrpcFrontend> tonic::transport::NamedService for GrpcFrontendServer<T> {
        const NAME: &'static str = "coordination.GrpcFrontend";
    }
}
#[doc = r" Generated server implementations."]
pub mod grpc_registry_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with GrpcRegistryServer."]
    #[async_trait]
    pub trait GrpcRegistry: Send + Sync + 'static {
        async fn register(
            &self,
            request: tonic::Request<super::ProtoServerDetail>,
        ) -> Result<tonic::Response<super::ProtoAck>, tonic::Status>;
        async fn lookup(
            &self,
            request: tonic::Request<super::ProtoLookupReq>,
        ) -> Result<tonic::Response<super::ProtoServerDetail>, tonic::Status>;
        async fn lookup_all(
            &self,
            request: tonic::Request<super::ProtoLookupReq>,
        ) -> Result<tonic::Response<super::ProtoLookupAllResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct GrpcRegistryServer<T: GrpcRegistry> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: GrpcRegistry> GrpcRegistryServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for GrpcRegistryServer<T>
    where
        T: GrpcRegistry,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/coordination.GrpcRegistry/Register" => {
                    #[allow(non_camel_case_types)]
                    struct RegisterSvc<T: GrpcRegistry>(pub Arc<T>);
                    impl<T: GrpcRegistry> tonic::server::UnaryService<super::ProtoServerDetail> for RegisterSvc<T> {
                        type Response = super::ProtoAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoServerDetail>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).register(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = RegisterSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcRegistry/Lookup" => {
                    #[allow(non_camel_case_types)]
                    struct LookupSvc<T: GrpcRegistry>(pub Arc<T>);
                    impl<T: GrpcRegistry> tonic::server::UnaryService<super::ProtoLookupReq> for LookupSvc<T> {
                        type Response = super::ProtoServerDetail;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoLookupReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).lookup(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = LookupSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcRegistry/LookupAll" => {
                    #[allow(non_camel_case_types)]
                    struct LookupAllSvc<T: GrpcRegistry>(pub Arc<T>);
                    impl<T: GrpcRegistry> tonic::server::UnaryService<super::ProtoLookupReq> for LookupAllSvc<T> {
                        type Response = super::ProtoLookupAllResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoLookupReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).lookup_all(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = LookupAllSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: GrpcRegistry> Clone for GrpcRegistryServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: GrpcRegistry> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: GrpcRegistry> tonic::transport::NamedService for GrpcRegistryServer<T> {
        const NAME: &'static str = "coordination.GrpcRegistry";
    }
}
