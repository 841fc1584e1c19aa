//! Wire-level constants of the vendor's private consumer API.
//!
//! Everything in this file is part of the reverse-engineered compatibility
//! contract: the vendor's app-identification heuristics match on these exact
//! byte sequences (User-Agent fingerprints, app credentials, opCode) and a
//! drift surfaces only as a generic vendor-side failure, never as a schema
//! error. Do not tidy, re-case, or "fix" any of these values; including the
//! vendor's own "ANDRIOD" misspelling.

/// Base URL of the vendor consumer API.
pub const VENDOR_BASE_URL: &str = "https://consumer.fcbox.com";

// === Endpoint paths ===
pub const CHALLENGE_PATH: &str = "/v1/account/secureCheckMobile";
pub const SEND_CODE_PATH: &str = "/v1/account/secureSendCode";
pub const LOGIN_PATH: &str = "/v1/account/secureLoginByPhone";
pub const COMPLETED_ORDERS_PATH: &str = "/post/express/pageQuery4App";
pub const PENDING_ORDERS_PATH: &str = "/post/mobilePick/queryWaitPick";
pub const CABINET_VISUAL_PATH: &str = "/post/clientGet/cabinetVisualInfo";
pub const OPEN_BOX_PATH: &str = "/post/clientGet/openBox";

// === Signing protocol ===
/// Operation code embedded in every signed URL and every pre-hash string.
pub const OP_CODE: &str = "30b2718363204beeae98b7d03a75c3a4";
/// Country calling code prefixed to the phone number in signable strings.
pub const NATION_CODE: &str = "86";
/// `type` code for the verification-code flow.
pub const SEND_CODE_TYPE: &str = "11";
/// Fixed login-type code spliced into the login pre-hash string.
pub const LOGIN_TYPE_CODE: &str = "01";

// === App identification headers ===
/// Device/app fingerprint sent on the account (pre-login) endpoints.
pub const ACCOUNT_USER_AGENT: &str = "channel=xiaomi,ip=,os=15,deviceType=2211133C,platform=Android,resolution=1080*2296,versionCode=6007000,versionName=6.7.0,timestamp=1742830229382";
/// Fingerprint variant sent on the completed/pending order endpoints.
pub const ORDERS_USER_AGENT: &str = "channel=xiaomi,ip=192.168.2.101,os=15,deviceType=2211133C,platform=Android,resolution=1080*2296,versionCode=6007000,versionName=6.7.0,timestamp=1742842891659";
/// Fingerprint variant sent on the cabinet-lookup and open-box endpoints.
pub const PICKUP_USER_AGENT: &str = "channel=xiaomi,ip=40.65.45.56,os=15,deviceType=2211133C,platform=Android,resolution=1080*2296,versionCode=6007000,versionName=6.7.0,timestamp=1742894334183";

/// App credential authenticating this backend's own traffic to the vendor.
/// Distinct from the end-user session token relayed in `Authorization`.
pub const ACCOUNT_USER_AUTH: &str = "tZGbsbamQGx8PkFPQ1acmgWu3ZW88nQsfdlMl2ZhxWs=";
/// User flag/auth pair observed on the post-login endpoints.
pub const SESSION_USER_FLAG: &str = "1061404658809110528";
pub const SESSION_USER_AUTH: &str = "akpP6vL3TSanbO2M2DHsFEbSj5kj3lPMdifTbcXUGbg5DW+9/bHk34dqg95Sz7wlG/b+Fj/IAlkGtwgYmyV4aQ==";

// === Trace headers ===
/// Trace-id prefix on the account endpoints.
pub const ACCOUNT_TRACE_PREFIX: &str = "ConsumerA";
/// Trace-id prefix (device-qualified) on the post-login endpoints.
pub const SESSION_TRACE_PREFIX: &str = "ConsumerA0fc2d4fc6bfea8b";
pub const PINPOINT_SPAN_ID: &str = "1";
pub const PINPOINT_SAMPLED: &str = "true";
pub const PINPOINT_PARENT_SPAN_ID: &str = "-1";
/// Trace-id span counters as observed per endpoint in captured app traffic.
pub const CHALLENGE_TRACE_SPAN: &str = "73";
pub const SEND_CODE_TRACE_SPAN: &str = "83";
pub const LOGIN_TRACE_SPAN: &str = "93";
pub const PENDING_TRACE_SPAN: &str = "1713";
pub const PICKUP_TRACE_SPAN: &str = "993";

// === Fixed request parameters ===
/// Channel code on the pending-orders query string.
pub const PENDING_CHANNEL_CODE: &str = "ANDROID_FC_APP";
/// `channel` value on the login query string.
pub const LOGIN_CHANNEL: &str = "0";
/// `type` value on the login query string.
pub const LOGIN_TYPE: &str = "1";
/// Channel literal in the open-box body ("ANDRIOD" is the vendor's spelling).
pub const OPEN_BOX_CHANNEL: &str = "APP-ANDRIOD";
pub const OPEN_BOX_CMDK_TYPE: &str = "1";
pub const OPEN_BOX_PICK_TYPE: &str = "ANDROID_PICK_MOBILE_APP";
pub const OPEN_BOX_FROM_SOURCE: &str = "2";
pub const OPEN_BOX_SOURCE: &str = "0";
pub const OPEN_BOX_POPUP_TIMEOUT: i64 = 120;
pub const OPEN_BOX_SESSION_TOKEN_TIME: i64 = 120;

// === Normalized order tagging ===
/// `expressStatus` injected on every pending (nested-shape) record.
pub const EXPRESS_STATUS_PENDING: &str = "1";
/// `expressStatus` injected on every completed (flat-shape) record.
pub const EXPRESS_STATUS_COMPLETED: &str = "2";

// === Normalization sentinels (rendered directly by vendor-facing clients) ===
/// Company name default when the vendor record omits it.
pub const UNKNOWN_COMPANY: &str = "未知快递";
/// Courier name default.
pub const UNKNOWN_COURIER: &str = "未知";
/// Pick-status description default on completed records.
pub const PICKED_UP_DESC: &str = "已取件";
/// Pick-status description default on pending records.
pub const WAITING_PICK_DESC: &str = "待取件";
/// Custody fee default when the vendor record omits it.
pub const ZERO_CUSTODY_FEE: &str = "0";
