use adapter_api::config::{
    AdapterConfig, AnalyticsConfig, BinaryPublisherConfig, CacheConfig, FilterConfig,
    IssuerConfig, JwtGeneratorConfig, JwtIssuerConfig, SecurityConfig, ServiceConfig,
    ThrottlingConfig,
};
use adapter_api::discovery::enforcer::{
    Analytics, AuthHeader, BinaryPublisher, Cache, ClaimMapping, Config, Filter, Issuer,
    JwtGenerator, JwtIssuer, JwtUser, Management, Metrics, PublisherPool, RestServer, Security,
    Service, ThreadPool, ThrottleAgent, Throttling, TmUrlGroup, Tracing,
};

/// Translate the adapter configuration into the enforcer config resource
pub fn marshal_config(config: &AdapterConfig) -> Config {
    let enforcer = &config.enforcer;

    Config {
        jwt_generator: marshal_jwt_generator(&enforcer.jwt_generator),
        jwt_issuer: marshal_jwt_issuer(&enforcer.jwt_issuer),
        auth_service: marshal_service(&enforcer.auth_service),
        security: marshal_security(&enforcer.security),
        cache: marshal_cache(&enforcer.cache),
        tracing: Tracing {
            enabled: enforcer.tracing.enabled,
            tracing_type: enforcer.tracing.tracing_type.clone(),
            config_properties: enforcer.tracing.config_properties.clone(),
        },
        metrics: Metrics {
            enabled: enforcer.metrics.enabled,
            metrics_type: enforcer.metrics.metrics_type.clone(),
        },
        analytics: marshal_analytics(&config.analytics),
        throttling: marshal_throttling(&enforcer.throttling),
        management: Management {
            username: enforcer.management.username.clone(),
            password: enforcer.management.password.clone(),
        },
        rest_server: RestServer {
            enable: enforcer.rest_server.enable,
        },
        filters: enforcer.filters.iter().map(marshal_filter).collect(),
    }
}

fn marshal_security(security: &SecurityConfig) -> Security {
    Security {
        token_service: security.token_service.iter().map(marshal_issuer).collect(),
        auth_header: AuthHeader {
            enable_outbound_auth_header: security.auth_header.enable_outbound_auth_header,
            authorization_header: security.auth_header.authorization_header.clone(),
            test_console_header_name: security.auth_header.test_console_header_name.clone(),
        },
    }
}

fn marshal_issuer(issuer: &IssuerConfig) -> Issuer {
    Issuer {
        name: issuer.name.clone(),
        issuer: issuer.issuer.clone(),
        certificate_alias: issuer.certificate_alias.clone(),
        certificate_file_path: issuer.certificate_file_path.clone(),
        jwks_url: issuer.jwks_url.clone(),
        consumer_key_claim: issuer.consumer_key_claim.clone(),
        validate_subscription: issuer.validate_subscription,
        claim_mapping: issuer
            .claim_mapping
            .iter()
            .map(|claim| ClaimMapping {
                remote_claim: claim.remote_claim.clone(),
                local_claim: claim.local_claim.clone(),
            })
            .collect(),
    }
}

fn marshal_service(service: &ServiceConfig) -> Service {
    Service {
        port: service.port,
        max_message_size: service.max_message_size,
        max_header_limit: service.max_header_limit,
        keep_alive_time: service.keep_alive_time,
        thread_pool: ThreadPool {
            core_size: service.thread_pool.core_size,
            max_size: service.thread_pool.max_size,
            keep_alive_time: service.thread_pool.keep_alive_time,
            queue_size: service.thread_pool.queue_size,
        },
    }
}

fn marshal_jwt_generator(generator: &JwtGeneratorConfig) -> JwtGenerator {
    JwtGenerator {
        enable: generator.enable,
        encoding: generator.encoding.clone(),
        claim_dialect: generator.claim_dialect.clone(),
        convert_dialect: generator.convert_dialect,
        header: generator.header.clone(),
        signing_algorithm: generator.signing_algorithm.clone(),
        enable_user_claims: generator.enable_user_claims,
        gateway_generator_impl: generator.gateway_generator_impl.clone(),
        claims_extractor_impl: generator.claims_extractor_impl.clone(),
        public_certificate_path: generator.public_certificate_path.clone(),
        private_key_path: generator.private_key_path.clone(),
    }
}

fn marshal_jwt_issuer(issuer: &JwtIssuerConfig) -> JwtIssuer {
    JwtIssuer {
        enabled: issuer.enabled,
        issuer: issuer.issuer.clone(),
        encoding: issuer.encoding.clone(),
        claim_dialect: issuer.claim_dialect.clone(),
        signing_algorithm: issuer.signing_algorithm.clone(),
        public_certificate_path: issuer.public_certificate_path.clone(),
        private_key_path: issuer.private_key_path.clone(),
        validity_period: issuer.validity_period,
        jwt_users: issuer
            .jwt_user
            .iter()
            .map(|user| JwtUser {
                username: user.username.clone(),
                password: user.password.clone(),
            })
            .collect(),
    }
}

fn marshal_cache(cache: &CacheConfig) -> Cache {
    Cache {
        enable: cache.enabled,
        maximum_size: cache.maximum_size,
        expiry_time: cache.expiry_time,
    }
}

fn marshal_analytics(analytics: &AnalyticsConfig) -> Analytics {
    Analytics {
        enabled: analytics.enabled,
        config_properties: analytics.enforcer.config_properties.clone(),
        service: marshal_service(&analytics.enforcer.log_receiver),
    }
}

fn marshal_throttling(throttling: &ThrottlingConfig) -> Throttling {
    Throttling {
        enable_global_event_publishing: throttling.enable_global_event_publishing,
        enable_header_conditions: throttling.enable_header_conditions,
        enable_query_param_conditions: throttling.enable_query_param_conditions,
        enable_jwt_claim_conditions: throttling.enable_jwt_claim_conditions,
        jms_connection_initial_context_factory: throttling
            .jms_connection_initial_context_factory
            .clone(),
        jms_connection_provider_url: throttling.jms_connection_provider_url.clone(),
        publisher: marshal_publisher(&throttling.publisher),
    }
}

fn marshal_publisher(publisher: &BinaryPublisherConfig) -> BinaryPublisher {
    let pool = &publisher.pool;
    let agent = &publisher.agent;

    BinaryPublisher {
        username: publisher.username.clone(),
        password: publisher.password.clone(),
        url_group: publisher
            .url_group
            .iter()
            .map(|group| TmUrlGroup {
                receiver_urls: group.receiver_urls.clone(),
                auth_urls: group.auth_urls.clone(),
                group_type: group.group_type.clone(),
            })
            .collect(),
        pool: PublisherPool {
            init_idle_object_data_publishing_agents: pool.init_idle_object_data_publishing_agents,
            max_idle_data_publishing_agents: pool.max_idle_data_publishing_agents,
            publisher_thread_pool_core_size: pool.publisher_thread_pool_core_size,
            publisher_thread_pool_maximum_size: pool.publisher_thread_pool_maximum_size,
            publisher_thread_pool_keep_alive_time: pool.publisher_thread_pool_keep_alive_time,
        },
        agent: ThrottleAgent {
            ssl_enabled_protocols: agent.ssl_enabled_protocols.clone(),
            ciphers: agent.ciphers.clone(),
            queue_size: agent.queue_size,
            batch_size: agent.batch_size,
            core_pool_size: agent.core_pool_size,
            socket_timeout_ms: agent.socket_timeout_ms,
            max_pool_size: agent.max_pool_size,
            keep_alive_time_in_pool: agent.keep_alive_time_in_pool,
            reconnection_interval: agent.reconnection_interval,
            max_transport_pool_size: agent.max_transport_pool_size,
            max_idle_connections: agent.max_idle_connections,
            eviction_time_period: agent.eviction_time_period,
            min_idle_time_in_pool: agent.min_idle_time_in_pool,
            secure_max_transport_pool_size: agent.secure_max_transport_pool_size,
            secure_max_idle_connections: agent.secure_max_idle_connections,
            secure_eviction_time_period: agent.secure_eviction_time_period,
            secure_min_idle_time_in_pool: agent.secure_min_idle_time_in_pool,
        },
    }
}

fn marshal_filter(filter: &FilterConfig) -> Filter {
    Filter {
        class_name: filter.class_name.clone(),
        position: filter.position,
        config_properties: filter.config_properties.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter_api::config::{
        ClaimMappingConfig, JwtUserConfig, ThrottleAgentConfig, UrlGroupConfig,
    };
    use serde_json::Value;
    use std::collections::HashMap;

    fn populated_config() -> AdapterConfig {
        let mut config = AdapterConfig::default();
        let enforcer = &mut config.enforcer;

        enforcer.security.token_service = vec![
            IssuerConfig {
                name: "Resident Key Manager".to_string(),
                issuer: "https://km:9443/oauth2/token".to_string(),
                certificate_alias: "wso2carbon".to_string(),
                jwks_url: "https://km:9443/oauth2/jwks".to_string(),
                consumer_key_claim: "azp".to_string(),
                validate_subscription: true,
                claim_mapping: vec![ClaimMappingConfig {
                    remote_claim: "sub".to_string(),
                    local_claim: "enduser".to_string(),
                }],
                ..IssuerConfig::default()
            },
            IssuerConfig {
                name: "MGW".to_string(),
                certificate_file_path: "/home/wso2/security/mg.pem".to_string(),
                ..IssuerConfig::default()
            },
        ];
        enforcer.security.auth_header.authorization_header = "Authorization".to_string();
        enforcer.security.auth_header.enable_outbound_auth_header = true;

        enforcer.auth_service.port = 9081;
        enforcer.auth_service.thread_pool.core_size = 12;
        enforcer.jwt_generator.enable = true;
        enforcer.jwt_generator.claim_dialect = "http://wso2.org/claims".to_string();
        enforcer.jwt_issuer.validity_period = 60;
        enforcer.jwt_issuer.jwt_user = vec![JwtUserConfig {
            username: "admin".to_string(),
            password: "secret".to_string(),
        }];
        enforcer.cache.maximum_size = 42;
        enforcer.tracing.enabled = true;
        enforcer.tracing.tracing_type = "zipkin".to_string();
        enforcer.tracing.config_properties =
            HashMap::from([("host".to_string(), "zipkin".to_string())]);
        enforcer.metrics.metrics_type = "prometheus".to_string();
        enforcer.management.username = "mgmt".to_string();
        enforcer.rest_server.enable = true;
        enforcer.throttling.enable_header_conditions = true;
        enforcer.throttling.jms_connection_provider_url = "amqp://tm:5672".to_string();
        enforcer.throttling.publisher.username = "publisher".to_string();
        enforcer.throttling.publisher.url_group = vec![UrlGroupConfig {
            receiver_urls: vec!["tcp://tm:9611".to_string()],
            auth_urls: vec!["ssl://tm:9711".to_string()],
            group_type: "loadbalance".to_string(),
        }];
        enforcer.throttling.publisher.pool.max_idle_data_publishing_agents = 250;
        enforcer.throttling.publisher.agent = ThrottleAgentConfig {
            ssl_enabled_protocols: "TLSv1.2".to_string(),
            socket_timeout_ms: 30000,
            secure_min_idle_time_in_pool: 5000,
            ..ThrottleAgentConfig::default()
        };
        enforcer.filters = vec![
            FilterConfig {
                class_name: "org.example.First".to_string(),
                position: 1,
                config_properties: HashMap::from([("k".to_string(), "v".to_string())]),
            },
            FilterConfig {
                class_name: "org.example.Second".to_string(),
                position: 2,
                ..FilterConfig::default()
            },
        ];

        config.analytics.enabled = true;
        config.analytics.enforcer.log_receiver.port = 18091;
        config
            .analytics
            .enforcer
            .config_properties
            .insert("authToken".to_string(), "t0k3n".to_string());
        config
    }

    /// Every scalar leaf carries a value no other leaf shares
    const DISTINCT_LEAVES: &str = r#"
enforcer:
  security:
    tokenService:
      - name: issuer-0-name
        issuer: issuer-0-issuer
        certificateAlias: issuer-0-alias
        certificateFilePath: issuer-0-cert-path
        jwksUrl: issuer-0-jwks
        consumerKeyClaim: issuer-0-ck-claim
        validateSubscription: true
        claimMapping:
          - remoteClaim: claim-0-remote
            localClaim: claim-0-local
          - remoteClaim: claim-1-remote
            localClaim: claim-1-local
      - name: issuer-1-name
        issuer: issuer-1-issuer
        certificateAlias: issuer-1-alias
        certificateFilePath: issuer-1-cert-path
        jwksUrl: issuer-1-jwks
        consumerKeyClaim: issuer-1-ck-claim
        validateSubscription: false
    authHeader:
      enableOutboundAuthHeader: true
      authorizationHeader: auth-header-name
      testConsoleHeaderName: test-console-header
  authService:
    port: 101
    maxMessageSize: 102
    maxHeaderLimit: 103
    keepAliveTime: 104
    threadPool:
      coreSize: 105
      maxSize: 106
      keepAliveTime: 107
      queueSize: 108
  jwtGenerator:
    enable: true
    encoding: gen-encoding
    claimDialect: gen-dialect
    convertDialect: false
    header: gen-header
    signingAlgorithm: gen-alg
    enableUserClaims: true
    gatewayGeneratorImpl: gen-gateway-impl
    claimsExtractorImpl: gen-extractor-impl
    publicCertificatePath: gen-public-cert
    privateKeyPath: gen-private-key
  jwtIssuer:
    enabled: true
    issuer: iss-issuer
    encoding: iss-encoding
    claimDialect: iss-dialect
    signingAlgorithm: iss-alg
    publicCertificatePath: iss-public-cert
    privateKeyPath: iss-private-key
    validityPeriod: 109
    jwtUser:
      - username: user-0-name
        password: user-0-pass
      - username: user-1-name
        password: user-1-pass
  cache:
    enabled: false
    maximumSize: 110
    expiryTime: 111
  tracing:
    enabled: true
    type: tracing-type
    configProperties:
      tracing-key: tracing-value
  metrics:
    enabled: true
    type: metrics-type
  throttling:
    enableGlobalEventPublishing: true
    enableHeaderConditions: false
    enableQueryParamConditions: true
    enableJwtClaimConditions: false
    jmsConnectionInitialContextFactory: jms-factory
    jmsConnectionProviderUrl: jms-provider-url
    publisher:
      username: pub-user
      password: pub-pass
      urlGroup:
        - receiverUrls: [group-0-receiver-a, group-0-receiver-b]
          authUrls: [group-0-auth]
          type: group-0-type
        - receiverUrls: [group-1-receiver]
          authUrls: [group-1-auth-a, group-1-auth-b]
          type: group-1-type
      pool:
        initIdleObjectDataPublishingAgents: 201
        maxIdleDataPublishingAgents: 202
        publisherThreadPoolCoreSize: 203
        publisherThreadPoolMaximumSize: 204
        publisherThreadPoolKeepAliveTime: 205
      agent:
        sslEnabledProtocols: agent-protocols
        ciphers: agent-ciphers
        queueSize: 301
        batchSize: 302
        corePoolSize: 303
        socketTimeoutMS: 304
        maxPoolSize: 305
        keepAliveTimeInPool: 306
        reconnectionInterval: 307
        maxTransportPoolSize: 308
        maxIdleConnections: 309
        evictionTimePeriod: 310
        minIdleTimeInPool: 311
        secureMaxTransportPoolSize: 312
        secureMaxIdleConnections: 313
        secureEvictionTimePeriod: 314
        secureMinIdleTimeInPool: 315
  management:
    username: mgmt-user
    password: mgmt-pass
  restServer:
    enable: true
  filters:
    - className: filter-0-class
      position: 401
      configProperties:
        filter-0-key: filter-0-value
    - className: filter-1-class
      position: 402
analytics:
  enabled: true
  enforcer:
    configProperties:
      analytics-key: analytics-value
    logReceiver:
      port: 501
      maxMessageSize: 502
      maxHeaderLimit: 503
      keepAliveTime: 504
      threadPool:
        coreSize: 505
        maxSize: 506
        keepAliveTime: 507
        queueSize: 508
"#;

    /// Wire form of `DISTINCT_LEAVES`
    const DISTINCT_LEAVES_WIRE: &str = r#"
{
  "jwtGenerator": {
    "enable": true,
    "encoding": "gen-encoding",
    "claimDialect": "gen-dialect",
    "convertDialect": false,
    "header": "gen-header",
    "signingAlgorithm": "gen-alg",
    "enableUserClaims": true,
    "gatewayGeneratorImpl": "gen-gateway-impl",
    "claimsExtractorImpl": "gen-extractor-impl",
    "publicCertificatePath": "gen-public-cert",
    "privateKeyPath": "gen-private-key"
  },
  "jwtIssuer": {
    "enabled": true,
    "issuer": "iss-issuer",
    "encoding": "iss-encoding",
    "claimDialect": "iss-dialect",
    "signingAlgorithm": "iss-alg",
    "publicCertificatePath": "iss-public-cert",
    "privateKeyPath": "iss-private-key",
    "validityPeriod": 109,
    "jwtUsers": [
      {
        "username": "user-0-name",
        "password": "user-0-pass"
      },
      {
        "username": "user-1-name",
        "password": "user-1-pass"
      }
    ]
  },
  "authService": {
    "port": 101,
    "maxMessageSize": 102,
    "maxHeaderLimit": 103,
    "keepAliveTime": 104,
    "threadPool": {
      "coreSize": 105,
      "maxSize": 106,
      "keepAliveTime": 107,
      "queueSize": 108
    }
  },
  "security": {
    "tokenService": [
      {
        "name": "issuer-0-name",
        "issuer": "issuer-0-issuer",
        "certificateAlias": "issuer-0-alias",
        "certificateFilePath": "issuer-0-cert-path",
        "jwksUrl": "issuer-0-jwks",
        "consumerKeyClaim": "issuer-0-ck-claim",
        "validateSubscription": true,
        "claimMapping": [
          {
            "remoteClaim": "claim-0-remote",
            "localClaim": "claim-0-local"
          },
          {
            "remoteClaim": "claim-1-remote",
            "localClaim": "claim-1-local"
          }
        ]
      },
      {
        "name": "issuer-1-name",
        "issuer": "issuer-1-issuer",
        "certificateAlias": "issuer-1-alias",
        "certificateFilePath": "issuer-1-cert-path",
        "jwksUrl": "issuer-1-jwks",
        "consumerKeyClaim": "issuer-1-ck-claim",
        "validateSubscription": false,
        "claimMapping": []
      }
    ],
    "authHeader": {
      "enableOutboundAuthHeader": true,
      "authorizationHeader": "auth-header-name",
      "testConsoleHeaderName": "test-console-header"
    }
  },
  "cache": {
    "enable": false,
    "maximumSize": 110,
    "expiryTime": 111
  },
  "tracing": {
    "enabled": true,
    "type": "tracing-type",
    "configProperties": {
      "tracing-key": "tracing-value"
    }
  },
  "metrics": {
    "enabled": true,
    "type": "metrics-type"
  },
  "analytics": {
    "enabled": true,
    "configProperties": {
      "analytics-key": "analytics-value"
    },
    "service": {
      "port": 501,
      "maxMessageSize": 502,
      "maxHeaderLimit": 503,
      "keepAliveTime": 504,
      "threadPool": {
        "coreSize": 505,
        "maxSize": 506,
        "keepAliveTime": 507,
        "queueSize": 508
      }
    }
  },
  "throttling": {
    "enableGlobalEventPublishing": true,
    "enableHeaderConditions": false,
    "enableQueryParamConditions": true,
    "enableJwtClaimConditions": false,
    "jmsConnectionInitialContextFactory": "jms-factory",
    "jmsConnectionProviderUrl": "jms-provider-url",
    "publisher": {
      "username": "pub-user",
      "password": "pub-pass",
      "urlGroup": [
        {
          "receiverUrls": [
            "group-0-receiver-a",
            "group-0-receiver-b"
          ],
          "authUrls": [
            "group-0-auth"
          ],
          "type": "group-0-type"
        },
        {
          "receiverUrls": [
            "group-1-receiver"
          ],
          "authUrls": [
            "group-1-auth-a",
            "group-1-auth-b"
          ],
          "type": "group-1-type"
        }
      ],
      "pool": {
        "initIdleObjectDataPublishingAgents": 201,
        "maxIdleDataPublishingAgents": 202,
        "publisherThreadPoolCoreSize": 203,
        "publisherThreadPoolMaximumSize": 204,
        "publisherThreadPoolKeepAliveTime": 205
      },
      "agent": {
        "sslEnabledProtocols": "agent-protocols",
        "ciphers": "agent-ciphers",
        "queueSize": 301,
        "batchSize": 302,
        "corePoolSize": 303,
        "socketTimeoutMS": 304,
        "maxPoolSize": 305,
        "keepAliveTimeInPool": 306,
        "reconnectionInterval": 307,
        "maxTransportPoolSize": 308,
        "maxIdleConnections": 309,
        "evictionTimePeriod": 310,
        "minIdleTimeInPool": 311,
        "secureMaxTransportPoolSize": 312,
        "secureMaxIdleConnections": 313,
        "secureEvictionTimePeriod": 314,
        "secureMinIdleTimeInPool": 315
      }
    }
  },
  "management": {
    "username": "mgmt-user",
    "password": "mgmt-pass"
  },
  "restServer": {
    "enable": true
  },
  "filters": [
    {
      "className": "filter-0-class",
      "position": 401,
      "configProperties": {
        "filter-0-key": "filter-0-value"
      }
    },
    {
      "className": "filter-1-class",
      "position": 402,
      "configProperties": {}
    }
  ]
}
"#;

    #[test]
    fn test_every_leaf_reaches_its_wire_path() {
        let config = AdapterConfig::from_yaml_str(DISTINCT_LEAVES).unwrap();
        let wire = serde_json::to_value(marshal_config(&config)).unwrap();

        let expected: Value = serde_json::from_str(DISTINCT_LEAVES_WIRE).unwrap();
        assert_eq!(wire, expected);
    }

    #[test]
    fn test_filters_keep_declaration_order() {
        let wire = marshal_config(&populated_config());
        let names: Vec<_> = wire.filters.iter().map(|f| f.class_name.as_str()).collect();
        assert_eq!(names, vec!["org.example.First", "org.example.Second"]);
        assert_eq!(wire.filters[0].config_properties["k"], "v");
        assert_eq!(wire.filters[1].position, 2);
    }

    #[test]
    fn test_default_config_translates() {
        let wire = marshal_config(&AdapterConfig::default());
        assert!(wire.security.token_service.is_empty());
        assert!(wire.throttling.publisher.url_group.is_empty());
        assert!(wire.filters.is_empty());
        assert_eq!(wire.auth_service.port, 8081);
        assert_eq!(wire.analytics.service.port, 18090);
        assert_eq!(wire.throttling.publisher.agent, ThrottleAgent::default());
    }

    #[test]
    fn test_wire_json_field_names() {
        let wire = marshal_config(&populated_config());
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["authService"]["threadPool"]["coreSize"], 12);
        assert_eq!(json["security"]["tokenService"][0]["jwksUrl"], "https://km:9443/oauth2/jwks");
        assert_eq!(json["throttling"]["publisher"]["agent"]["socketTimeoutMS"], 30000);
        assert_eq!(json["tracing"]["type"], "zipkin");
    }
}
