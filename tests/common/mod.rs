//
//  insightly-rs
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use insightly::InsightlyClient;
use mockito::ServerGuard;

/// Key used by every test. Encodes to `dGVzdC1rZXk6` with the empty password.
pub const API_KEY: &str = "test-key";

pub const AUTHORIZATION: &str = "Basic dGVzdC1rZXk6";

/// Returns a client pointed at the mock server's `/v2.2` prefix.
pub fn client_for(server: &ServerGuard) -> InsightlyClient {
    InsightlyClient::with_endpoint(API_KEY, &format!("{}/v2.2", server.url()))
        .expect("mock server URL is valid")
}
