pub mod request_id;

pub use request_id::{
    get_request_id, request_id_middleware, RequestId, MAX_REQUEST_ID_LEN, REQUEST_ID_HEADER,
};
