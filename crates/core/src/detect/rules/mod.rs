// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The built-in rule catalogue.
//!
//! The rules follow the two shapes used by the gitleaks rule corpus: the
//! "unique token" shape for secrets with a distinctive prefix, and the
//! "semi generic" shape that anchors an otherwise generic secret pattern to
//! nearby identifier keywords and an assignment operator.

pub mod preset;

use crate::detect::rule::RegexTarget;

/// An uncompiled detection rule.
#[derive(Debug, Clone)]
pub struct RuleDef {
    pub id: &'static str,
    pub description: &'static str,
    pub regex: String,
    pub secret_group: usize,
    pub entropy: f64,
    pub allowlists: Vec<AllowListDef>,
}

/// An uncompiled allow-list.
#[derive(Debug, Clone)]
pub struct AllowListDef {
    pub regex_target: RegexTarget,
    pub stop_words: &'static [&'static str],
    pub regexes: &'static [&'static str],
}

impl RuleDef {
    fn new(id: &'static str, description: &'static str, regex: String) -> Self {
        Self {
            id,
            description,
            regex,
            secret_group: 0,
            entropy: 0.0,
            allowlists: Vec::new(),
        }
    }

    fn entropy(mut self, entropy: f64) -> Self {
        self.entropy = entropy;
        self
    }

    fn secret_group(mut self, secret_group: usize) -> Self {
        self.secret_group = secret_group;
        self
    }

    fn allowlist(mut self, allowlist: AllowListDef) -> Self {
        self.allowlists.push(allowlist);
        self
    }
}

/// A secret with a distinctive prefix, terminated by a quote, whitespace or
/// end of input.
fn unique_token(pattern: &str) -> String {
    format!(r#"(?i)\b({pattern})(?:['|"|\n|\r|\s|\x60|;]|$)"#)
}

/// A generic secret pattern anchored to identifier keywords followed by an
/// assignment-like operator.
fn semi_generic(identifiers: &[&str], secret: &str) -> String {
    format!(
        r#"(?i)(?:{})(?:[0-9a-z\-_\t .]{{0,20}})(?:[\s|']|[\s|"]){{0,3}}(?:=|>|:{{1,3}}=|\|\|:|<=|=>|:|\?=)(?:'|"|\s|=|\x60){{0,5}}({})(?:['|"|\n|\r|\s|\x60|;]|$)"#,
        identifiers.join("|"),
        secret
    )
}

const UUID: &str = r"[0-9a-f]{8}-(?:[0-9a-f]{4}-){3}[0-9a-f]{12}";

/// Placeholder fragments that show up in documentation and test fixtures.
const DOC_STOP_WORDS: &[&str] = &[
    "EXAMPLE", "example", "sample", "test", "placeholder", "dummy", "insert",
    "abcdef", "123456", "xxxxxx", "password", "passwd", "secret", "token",
    "change", "client", "default", "redacted", "foobar", "fixme", "todo",
    "value", "string", "undefined", "delete", "openssh", "your_", "_your",
];

pub fn adobe_client_id() -> RuleDef {
    RuleDef::new(
        "adobe-client-id",
        "Adobe Client ID (OAuth Web)",
        semi_generic(&["adobe"], r"[a-f0-9]{32}"),
    )
}

pub fn adobe_client_secret() -> RuleDef {
    RuleDef::new(
        "adobe-client-secret",
        "Adobe Client Secret",
        unique_token(r"p8e-[a-z0-9]{32}"),
    )
}

pub fn age_secret_key() -> RuleDef {
    RuleDef::new(
        "age-secret-key",
        "Age Secret Key",
        r"AGE-SECRET-KEY-1[QPZRY9X8GF2TVDW0S3JN54KHCE6MUA7L]{58}".to_string(),
    )
}

pub fn airtable_api_key() -> RuleDef {
    RuleDef::new(
        "airtable-api-key",
        "Airtable API Key",
        semi_generic(&["airtable"], r"[a-z0-9]{17}"),
    )
}

pub fn algolia_api_key() -> RuleDef {
    RuleDef::new(
        "algolia-api-key",
        "Algolia API Key",
        semi_generic(&["algolia"], r"[a-z0-9]{32}"),
    )
}

pub fn alibaba_access_key_id() -> RuleDef {
    RuleDef::new(
        "alibaba-access-key-id",
        "Alibaba AccessKey ID",
        unique_token(r"LTAI[a-z0-9]{20}"),
    )
}

pub fn alibaba_secret_key() -> RuleDef {
    RuleDef::new(
        "alibaba-secret-key",
        "Alibaba Secret Key",
        semi_generic(&["alibaba"], r"[a-z0-9]{30}"),
    )
}

pub fn asana_client_id() -> RuleDef {
    RuleDef::new(
        "asana-client-id",
        "Asana Client ID",
        semi_generic(&["asana"], r"[0-9]{16}"),
    )
}

pub fn asana_client_secret() -> RuleDef {
    RuleDef::new(
        "asana-client-secret",
        "Asana Client Secret",
        semi_generic(&["asana"], r"[a-z0-9]{32}"),
    )
}

pub fn atlassian_api_token() -> RuleDef {
    RuleDef::new(
        "atlassian-api-token",
        "Atlassian API Token",
        semi_generic(&["atlassian", "confluence", "jira"], r"[a-z0-9]{24}"),
    )
}

pub fn aws_access_token() -> RuleDef {
    RuleDef::new(
        "aws-access-token",
        "AWS Access Token",
        r"\b((?:A3T[A-Z0-9]|AKIA|AGPA|AIDA|AROA|AIPA|ANPA|ANVA|ASIA)[A-Z0-9]{16})\b".to_string(),
    )
    .entropy(3.0)
    .allowlist(AllowListDef {
        regex_target: RegexTarget::Secret,
        stop_words: &["EXAMPLE", "SAMPLEKEY"],
        regexes: &[],
    })
}

pub fn beamer_api_token() -> RuleDef {
    RuleDef::new(
        "beamer-api-token",
        "Beamer API Token",
        semi_generic(&["beamer"], r"b_[a-z0-9=_\-]{44}"),
    )
}

pub fn bitbucket_client_id() -> RuleDef {
    RuleDef::new(
        "bitbucket-client-id",
        "Bitbucket Client ID",
        semi_generic(&["bitbucket"], r"[a-z0-9]{32}"),
    )
}

pub fn bitbucket_client_secret() -> RuleDef {
    RuleDef::new(
        "bitbucket-client-secret",
        "Bitbucket Client Secret",
        semi_generic(&["bitbucket"], r"[a-z0-9=_\-]{64}"),
    )
}

pub fn bittrex_access_key() -> RuleDef {
    RuleDef::new(
        "bittrex-access-key",
        "Bittrex Access Key",
        semi_generic(&["bittrex"], r"[a-z0-9]{32}"),
    )
}

pub fn bittrex_secret_key() -> RuleDef {
    RuleDef::new(
        "bittrex-secret-key",
        "Bittrex Secret Key",
        semi_generic(&["bittrex"], r"[a-z0-9]{32}"),
    )
}

pub fn clojars_api_token() -> RuleDef {
    RuleDef::new(
        "clojars-api-token",
        "Clojars API Token",
        r"(?i)CLOJARS_[a-z0-9]{60}".to_string(),
    )
}

pub fn codecov_access_token() -> RuleDef {
    RuleDef::new(
        "codecov-access-token",
        "Codecov Access Token",
        semi_generic(&["codecov"], r"[a-z0-9]{32}"),
    )
}

pub fn coinbase_access_token() -> RuleDef {
    RuleDef::new(
        "coinbase-access-token",
        "Coinbase Access Token",
        semi_generic(&["coinbase"], r"[a-z0-9_-]{64}"),
    )
}

pub fn confluent_access_token() -> RuleDef {
    RuleDef::new(
        "confluent-access-token",
        "Confluent Access Token",
        semi_generic(&["confluent"], r"[a-z0-9]{16}"),
    )
}

pub fn confluent_secret_key() -> RuleDef {
    RuleDef::new(
        "confluent-secret-key",
        "Confluent Secret Key",
        semi_generic(&["confluent"], r"[a-z0-9]{64}"),
    )
}

pub fn contentful_delivery_api_token() -> RuleDef {
    RuleDef::new(
        "contentful-delivery-api-token",
        "Contentful delivery API Token",
        semi_generic(&["contentful"], r"[a-z0-9=_\-]{43}"),
    )
}

pub fn databricks_api_token() -> RuleDef {
    RuleDef::new(
        "databricks-api-token",
        "Databricks API Token",
        unique_token(r"dapi[a-h0-9]{32}"),
    )
}

pub fn datadog_access_token() -> RuleDef {
    RuleDef::new(
        "datadog-access-token",
        "Datadog Access Token",
        semi_generic(&["datadog"], r"[a-z0-9]{40}"),
    )
}

pub fn digitalocean_access_token() -> RuleDef {
    RuleDef::new(
        "digitalocean-access-token",
        "DigitalOcean OAuth Access Token",
        unique_token(r"doo_v1_[a-f0-9]{64}"),
    )
}

pub fn digitalocean_pat() -> RuleDef {
    RuleDef::new(
        "digitalocean-pat",
        "DigitalOcean Personal Access Token",
        unique_token(r"dop_v1_[a-f0-9]{64}"),
    )
}

pub fn digitalocean_refresh_token() -> RuleDef {
    RuleDef::new(
        "digitalocean-refresh-token",
        "DigitalOcean OAuth Refresh Token",
        unique_token(r"dor_v1_[a-f0-9]{64}"),
    )
}

pub fn discord_api_token() -> RuleDef {
    RuleDef::new(
        "discord-api-token",
        "Discord API Key",
        semi_generic(&["discord"], r"[a-f0-9]{64}"),
    )
}

pub fn discord_client_id() -> RuleDef {
    RuleDef::new(
        "discord-client-id",
        "Discord Client ID",
        semi_generic(&["discord"], r"[0-9]{18}"),
    )
}

pub fn discord_client_secret() -> RuleDef {
    RuleDef::new(
        "discord-client-secret",
        "Discord Client Secret",
        semi_generic(&["discord"], r"[a-z0-9=_\-]{32}"),
    )
}

pub fn doppler_api_token() -> RuleDef {
    RuleDef::new(
        "doppler-api-token",
        "Doppler API Token",
        unique_token(r"dp\.pt\.[a-z0-9]{43}"),
    )
}

pub fn droneci_access_token() -> RuleDef {
    RuleDef::new(
        "droneci-access-token",
        "Droneci Access Token",
        semi_generic(&["droneci"], r"[a-z0-9]{32}"),
    )
}

pub fn dropbox_api_token() -> RuleDef {
    RuleDef::new(
        "dropbox-api-token",
        "Dropbox API Secret",
        semi_generic(&["dropbox"], r"[a-z0-9]{15}"),
    )
}

pub fn dropbox_long_lived_api_token() -> RuleDef {
    RuleDef::new(
        "dropbox-long-lived-api-token",
        "Dropbox long lived API Token",
        semi_generic(&["dropbox"], r"[a-z0-9]{11}(?:AAAAAAAAAA)[a-z0-9\-_=]{43}"),
    )
}

pub fn dropbox_short_lived_api_token() -> RuleDef {
    RuleDef::new(
        "dropbox-short-lived-api-token",
        "Dropbox short lived API Token",
        semi_generic(&["dropbox"], r"sl\.[a-z0-9\-=_]{135}"),
    )
}

pub fn duffel_api_token() -> RuleDef {
    RuleDef::new(
        "duffel-api-token",
        "Duffel API Token",
        unique_token(r"duffel_(?:test|live)_[a-z0-9_\-=]{43}"),
    )
}

pub fn dynatrace_api_token() -> RuleDef {
    RuleDef::new(
        "dynatrace-api-token",
        "Dynatrace API Token",
        unique_token(r"dt0c01\.[a-z0-9]{24}\.[a-z0-9]{64}"),
    )
}

pub fn easypost_api_token() -> RuleDef {
    RuleDef::new(
        "easypost-api-token",
        "EasyPost API Token",
        unique_token(r"EZAK[a-z0-9]{54}"),
    )
}

pub fn easypost_test_api_token() -> RuleDef {
    RuleDef::new(
        "easypost-test-api-token",
        "EasyPost test API Token",
        unique_token(r"EZTK[a-z0-9]{54}"),
    )
}

pub fn etsy_access_token() -> RuleDef {
    RuleDef::new(
        "etsy-access-token",
        "Etsy Access Token",
        semi_generic(&["etsy"], r"[a-z0-9]{24}"),
    )
}

pub fn facebook_access_token() -> RuleDef {
    RuleDef::new(
        "facebook-access-token",
        "Facebook Access Token",
        semi_generic(&["facebook"], r"\d{15,16}(?:\||%)[0-9a-z\-_]{27,40}"),
    )
}

pub fn facebook_secret() -> RuleDef {
    RuleDef::new(
        "facebook-secret",
        "Facebook Secret",
        semi_generic(&["facebook"], r"[a-f0-9]{32}"),
    )
}

pub fn fastly_api_token() -> RuleDef {
    RuleDef::new(
        "fastly-api-token",
        "Fastly API Key",
        semi_generic(&["fastly"], r"[a-z0-9=_\-]{32}"),
    )
}

pub fn finicity_api_token() -> RuleDef {
    RuleDef::new(
        "finicity-api-token",
        "Finicity API Token",
        semi_generic(&["finicity"], r"[a-f0-9]{32}"),
    )
}

pub fn finicity_client_secret() -> RuleDef {
    RuleDef::new(
        "finicity-client-secret",
        "Finicity Client Secret",
        semi_generic(&["finicity"], r"[a-z0-9]{20}"),
    )
}

pub fn finnhub_access_token() -> RuleDef {
    RuleDef::new(
        "finnhub-access-token",
        "Finnhub Access Token",
        semi_generic(&["finnhub"], r"[a-z0-9]{20}"),
    )
}

pub fn flickr_access_token() -> RuleDef {
    RuleDef::new(
        "flickr-access-token",
        "Flickr Access Token",
        semi_generic(&["flickr"], r"[a-z0-9]{32}"),
    )
}

pub fn flutterwave_encryption_key() -> RuleDef {
    RuleDef::new(
        "flutterwave-encryption-key",
        "Flutterwave Encryption Key",
        unique_token(r"FLWSECK_TEST-[a-h0-9]{12}"),
    )
}

pub fn flutterwave_public_key() -> RuleDef {
    RuleDef::new(
        "flutterwave-public-key",
        "Flutterwave Public Key",
        unique_token(r"FLWPUBK_TEST-[a-h0-9]{32}-X"),
    )
}

pub fn flutterwave_secret_key() -> RuleDef {
    RuleDef::new(
        "flutterwave-secret-key",
        "Flutterwave Secret Key",
        unique_token(r"FLWSECK_TEST-[a-h0-9]{32}-X"),
    )
}

pub fn flyio_access_token() -> RuleDef {
    RuleDef::new(
        "flyio-access-token",
        "Fly.io Access Token",
        unique_token(r"fo1_[a-z0-9\-_]{43}"),
    )
}

pub fn frameio_api_token() -> RuleDef {
    RuleDef::new(
        "frameio-api-token",
        "Frame.io API Token",
        unique_token(r"fio-u-[a-z0-9\-_=]{64}"),
    )
}

pub fn freshbooks_access_token() -> RuleDef {
    RuleDef::new(
        "freshbooks-access-token",
        "Freshbooks Access Token",
        semi_generic(&["freshbooks"], r"[a-z0-9]{64}"),
    )
}

pub fn gcp_api_key() -> RuleDef {
    RuleDef::new(
        "gcp-api-key",
        "GCP API Key",
        unique_token(r"AIza[0-9a-z\-_]{35}"),
    )
    .entropy(3.0)
}

pub fn generic_api_key() -> RuleDef {
    RuleDef::new(
        "generic-api-key",
        "Generic API Key",
        semi_generic(
            &[
                "key", "api", "token", "secret", "client", "passwd", "password", "auth", "access",
            ],
            r"[0-9a-z\-_.=]{10,150}",
        ),
    )
    .entropy(3.5)
    .allowlist(AllowListDef {
        regex_target: RegexTarget::Secret,
        stop_words: DOC_STOP_WORDS,
        regexes: &[],
    })
}

pub fn github_app_token() -> RuleDef {
    RuleDef::new(
        "github-app-token",
        "GitHub App Token",
        unique_token(r"(?:ghu|ghs)_[0-9a-zA-Z]{36}"),
    )
    .entropy(3.0)
}

pub fn github_fine_grained_pat() -> RuleDef {
    RuleDef::new(
        "github-fine-grained-pat",
        "GitHub Fine-Grained Personal Access Token",
        unique_token(r"github_pat_[0-9a-zA-Z_]{82}"),
    )
    .entropy(3.0)
}

pub fn github_oauth() -> RuleDef {
    RuleDef::new(
        "github-oauth",
        "GitHub OAuth Access Token",
        unique_token(r"gho_[0-9a-zA-Z]{36}"),
    )
    .entropy(3.0)
}

pub fn github_pat() -> RuleDef {
    RuleDef::new(
        "github-pat",
        "GitHub Personal Access Token",
        unique_token(r"ghp_[0-9a-zA-Z]{36}"),
    )
    .entropy(3.0)
}

pub fn github_refresh_token() -> RuleDef {
    RuleDef::new(
        "github-refresh-token",
        "GitHub Refresh Token",
        unique_token(r"ghr_[0-9a-zA-Z]{36}"),
    )
    .entropy(3.0)
}

pub fn gitlab_pat() -> RuleDef {
    RuleDef::new(
        "gitlab-pat",
        "GitLab Personal Access Token",
        unique_token(r"glpat-[0-9a-zA-Z\-_]{20}"),
    )
    .entropy(3.0)
}

pub fn gitlab_pipeline_trigger_token() -> RuleDef {
    RuleDef::new(
        "gitlab-pipeline-trigger-token",
        "GitLab Pipeline Trigger Token",
        unique_token(r"glptt-[0-9a-f]{40}"),
    )
}

pub fn gitlab_runner_registration_token() -> RuleDef {
    RuleDef::new(
        "gitlab-runner-registration-token",
        "GitLab Runner Registration Token",
        unique_token(r"GR1348941[0-9a-zA-Z\-_]{20}"),
    )
}

pub fn gitter_access_token() -> RuleDef {
    RuleDef::new(
        "gitter-access-token",
        "Gitter Access Token",
        semi_generic(&["gitter"], r"[a-z0-9_-]{40}"),
    )
}

pub fn gocardless_api_token() -> RuleDef {
    RuleDef::new(
        "gocardless-api-token",
        "GoCardless API Token",
        semi_generic(&["gocardless"], r"live_[a-z0-9\-_=]{40}"),
    )
}

pub fn grafana_api_key() -> RuleDef {
    RuleDef::new(
        "grafana-api-key",
        "Grafana API Key",
        unique_token(r"eyJrIjoi[a-z0-9]{70,400}={0,2}"),
    )
}

pub fn grafana_cloud_api_token() -> RuleDef {
    RuleDef::new(
        "grafana-cloud-api-token",
        "Grafana cloud API Token",
        unique_token(r"glc_[a-z0-9+/]{32,400}={0,2}"),
    )
}

pub fn grafana_service_account_token() -> RuleDef {
    RuleDef::new(
        "grafana-service-account-token",
        "Grafana service account Token",
        unique_token(r"glsa_[a-z0-9]{32}_[a-f0-9]{8}"),
    )
}

pub fn hashicorp_tf_api_token() -> RuleDef {
    RuleDef::new(
        "hashicorp-tf-api-token",
        "HashiCorp Terraform user/org API Token",
        unique_token(r"[a-z0-9]{14}\.atlasv1\.[a-z0-9\-_=]{60,70}"),
    )
}

pub fn heroku_api_key() -> RuleDef {
    RuleDef::new(
        "heroku-api-key",
        "Heroku API Key",
        semi_generic(&["heroku"], UUID),
    )
}

pub fn hubspot_api_key() -> RuleDef {
    RuleDef::new(
        "hubspot-api-key",
        "HubSpot API Token",
        semi_generic(&["hubspot"], UUID),
    )
}

pub fn huggingface_access_token() -> RuleDef {
    RuleDef::new(
        "huggingface-access-token",
        "Hugging Face Access Token",
        unique_token(r"hf_[a-z]{34}"),
    )
    .entropy(2.0)
}

pub fn infracost_api_token() -> RuleDef {
    RuleDef::new(
        "infracost-api-token",
        "Infracost API Token",
        unique_token(r"ico-[a-z0-9]{32}"),
    )
}

pub fn intercom_api_key() -> RuleDef {
    RuleDef::new(
        "intercom-api-key",
        "Intercom API Token",
        semi_generic(&["intercom"], r"[a-z0-9=_\-]{60}"),
    )
}

pub fn jfrog_api_key() -> RuleDef {
    RuleDef::new(
        "jfrog-api-key",
        "JFrog API Key",
        semi_generic(&["jfrog", "artifactory", "bintray", "xray"], r"[a-z0-9]{73}"),
    )
}

pub fn jfrog_identity_token() -> RuleDef {
    RuleDef::new(
        "jfrog-identity-token",
        "JFrog Identity Token",
        semi_generic(&["jfrog", "artifactory", "bintray", "xray"], r"[a-z0-9]{64}"),
    )
}

pub fn jwt() -> RuleDef {
    RuleDef::new(
        "jwt",
        "JSON Web Token",
        unique_token(r"ey[a-zA-Z0-9]{17,}\.ey[a-zA-Z0-9/_-]{17,}\.(?:[a-zA-Z0-9/_-]{10,}={0,2})?"),
    )
}

pub fn kraken_access_token() -> RuleDef {
    RuleDef::new(
        "kraken-access-token",
        "Kraken Access Token",
        semi_generic(&["kraken"], r"[a-z0-9/=_\+\-]{80,90}"),
    )
}

pub fn kucoin_access_token() -> RuleDef {
    RuleDef::new(
        "kucoin-access-token",
        "Kucoin Access Token",
        semi_generic(&["kucoin"], r"[a-f0-9]{24}"),
    )
}

pub fn kucoin_secret_key() -> RuleDef {
    RuleDef::new(
        "kucoin-secret-key",
        "Kucoin Secret Key",
        semi_generic(&["kucoin"], UUID),
    )
}

pub fn launchdarkly_access_token() -> RuleDef {
    RuleDef::new(
        "launchdarkly-access-token",
        "Launchdarkly Access Token",
        semi_generic(&["launchdarkly"], r"[a-z0-9=_\-]{40}"),
    )
}

pub fn linear_api_key() -> RuleDef {
    RuleDef::new(
        "linear-api-key",
        "Linear API Token",
        r"(?i)lin_api_[a-z0-9]{40}".to_string(),
    )
}

pub fn linear_client_secret() -> RuleDef {
    RuleDef::new(
        "linear-client-secret",
        "Linear Client Secret",
        semi_generic(&["linear"], r"[a-f0-9]{32}"),
    )
}

pub fn linkedin_client_id() -> RuleDef {
    RuleDef::new(
        "linkedin-client-id",
        "LinkedIn Client ID",
        semi_generic(&["linkedin", "linked-in"], r"[a-z0-9]{14}"),
    )
}

pub fn linkedin_client_secret() -> RuleDef {
    RuleDef::new(
        "linkedin-client-secret",
        "LinkedIn Client Secret",
        semi_generic(&["linkedin", "linked-in"], r"[a-z0-9]{16}"),
    )
}

pub fn lob_api_key() -> RuleDef {
    RuleDef::new(
        "lob-api-key",
        "Lob API Key",
        semi_generic(&["lob"], r"(?:live|test)_[a-f0-9]{35}"),
    )
}

pub fn lob_pub_api_key() -> RuleDef {
    RuleDef::new(
        "lob-pub-api-key",
        "Lob Publishable API Key",
        semi_generic(&["lob"], r"(?:test|live)_pub_[a-f0-9]{31}"),
    )
}

pub fn mailchimp_api_key() -> RuleDef {
    RuleDef::new(
        "mailchimp-api-key",
        "Mailchimp API Key",
        semi_generic(&["mailchimp"], r"[a-f0-9]{32}-us[0-9]{1,2}"),
    )
}

pub fn mailgun_private_api_token() -> RuleDef {
    RuleDef::new(
        "mailgun-private-api-token",
        "Mailgun private API Token",
        semi_generic(&["mailgun"], r"key-[a-f0-9]{32}"),
    )
}

pub fn mailgun_pub_key() -> RuleDef {
    RuleDef::new(
        "mailgun-pub-key",
        "Mailgun public validation Key",
        semi_generic(&["mailgun"], r"pubkey-[a-f0-9]{32}"),
    )
}

pub fn mailgun_signing_key() -> RuleDef {
    RuleDef::new(
        "mailgun-signing-key",
        "Mailgun webhook signing Key",
        semi_generic(&["mailgun"], r"[a-h0-9]{32}-[a-h0-9]{8}-[a-h0-9]{8}"),
    )
}

pub fn mapbox_api_token() -> RuleDef {
    RuleDef::new(
        "mapbox-api-token",
        "MapBox API Token",
        semi_generic(&["mapbox"], r"pk\.[a-z0-9]{60}\.[a-z0-9]{22}"),
    )
}

pub fn mattermost_access_token() -> RuleDef {
    RuleDef::new(
        "mattermost-access-token",
        "Mattermost Access Token",
        semi_generic(&["mattermost"], r"[a-z0-9]{26}"),
    )
}

pub fn messagebird_api_token() -> RuleDef {
    RuleDef::new(
        "messagebird-api-token",
        "MessageBird API Token",
        semi_generic(
            &["messagebird", "message-bird", "message_bird"],
            r"[a-z0-9]{25}",
        ),
    )
}

pub fn microsoft_teams_webhook() -> RuleDef {
    RuleDef::new(
        "microsoft-teams-webhook",
        "Microsoft Teams Webhook",
        format!(
            r"https://[a-z0-9]+\.webhook\.office\.com/webhookb2/{UUID}@{UUID}/IncomingWebhook/[a-z0-9]{{32}}/{UUID}"
        ),
    )
}

pub fn netlify_access_token() -> RuleDef {
    RuleDef::new(
        "netlify-access-token",
        "Netlify Access Token",
        semi_generic(&["netlify"], r"[a-z0-9=_\-]{40,46}"),
    )
}

pub fn new_relic_browser_api_token() -> RuleDef {
    RuleDef::new(
        "new-relic-browser-api-token",
        "New Relic ingest browser API Token",
        semi_generic(&["new-relic", "newrelic", "new_relic"], r"NRJS-[a-f0-9]{19}"),
    )
}

pub fn new_relic_user_api_id() -> RuleDef {
    RuleDef::new(
        "new-relic-user-api-id",
        "New Relic User API ID",
        semi_generic(&["new-relic", "newrelic", "new_relic"], r"[a-z0-9]{64}"),
    )
}

pub fn new_relic_user_api_key() -> RuleDef {
    RuleDef::new(
        "new-relic-user-api-key",
        "New Relic User API Key",
        semi_generic(
            &["new-relic", "newrelic", "new_relic"],
            r"NRAK-[a-z0-9]{27}",
        ),
    )
}

pub fn npm_access_token() -> RuleDef {
    RuleDef::new(
        "npm-access-token",
        "npm Access Token",
        unique_token(r"npm_[a-z0-9]{36}"),
    )
    .entropy(2.0)
}

pub fn nytimes_access_token() -> RuleDef {
    RuleDef::new(
        "nytimes-access-token",
        "Nytimes Access Token",
        semi_generic(
            &["nytimes", "new-york-times", "newyorktimes"],
            r"[a-z0-9=_\-]{32}",
        ),
    )
}

pub fn okta_access_token() -> RuleDef {
    RuleDef::new(
        "okta-access-token",
        "Okta Access Token",
        semi_generic(&["okta"], r"[a-z0-9=_\-]{42}"),
    )
}

pub fn openai_api_key() -> RuleDef {
    RuleDef::new(
        "openai-api-key",
        "OpenAI API Key",
        unique_token(r"sk-[a-z0-9]{20}T3BlbkFJ[a-z0-9]{20}"),
    )
    .entropy(2.0)
}

pub fn openshift_user_token() -> RuleDef {
    RuleDef::new(
        "openshift-user-token",
        "Openshift User Token",
        unique_token(r"sha256~[\w-]{43}"),
    )
}

pub fn plaid_api_token() -> RuleDef {
    RuleDef::new(
        "plaid-api-token",
        "Plaid API Token",
        semi_generic(
            &["plaid"],
            &format!(r"access-(?:sandbox|development|production)-{UUID}"),
        ),
    )
}

pub fn plaid_client_id() -> RuleDef {
    RuleDef::new(
        "plaid-client-id",
        "Plaid Client ID",
        semi_generic(&["plaid"], r"[a-z0-9]{24}"),
    )
    .entropy(3.5)
}

pub fn plaid_secret_key() -> RuleDef {
    RuleDef::new(
        "plaid-secret-key",
        "Plaid Secret Key",
        semi_generic(&["plaid"], r"[a-z0-9]{30}"),
    )
    .entropy(3.5)
}

pub fn planetscale_api_token() -> RuleDef {
    RuleDef::new(
        "planetscale-api-token",
        "PlanetScale API Token",
        unique_token(r"pscale_tkn_[a-z0-9=\-_\.]{32,64}"),
    )
    .entropy(3.0)
}

pub fn planetscale_oauth_token() -> RuleDef {
    RuleDef::new(
        "planetscale-oauth-token",
        "PlanetScale OAuth Token",
        unique_token(r"pscale_oauth_[a-z0-9=\-_\.]{32,64}"),
    )
    .entropy(3.0)
}

pub fn planetscale_password() -> RuleDef {
    RuleDef::new(
        "planetscale-password",
        "PlanetScale password",
        unique_token(r"pscale_pw_[a-z0-9=\-_\.]{32,64}"),
    )
    .entropy(3.0)
}

pub fn postman_api_token() -> RuleDef {
    RuleDef::new(
        "postman-api-token",
        "Postman API Token",
        unique_token(r"PMAK-[a-f0-9]{24}-[a-f0-9]{34}"),
    )
}

pub fn prefect_api_token() -> RuleDef {
    RuleDef::new(
        "prefect-api-token",
        "Prefect API Token",
        unique_token(r"pnu_[a-z0-9]{36}"),
    )
}

pub fn private_key() -> RuleDef {
    RuleDef::new(
        "private-key",
        "Private Key",
        r"(?i)-----BEGIN[ A-Z0-9_-]{0,100}PRIVATE KEY(?: BLOCK)?-----[\s\S-]*?KEY(?: BLOCK)?----".to_string(),
    )
}

pub fn pulumi_api_token() -> RuleDef {
    RuleDef::new(
        "pulumi-api-token",
        "Pulumi API Token",
        unique_token(r"pul-[a-f0-9]{40}"),
    )
}

pub fn pypi_upload_token() -> RuleDef {
    RuleDef::new(
        "pypi-upload-token",
        "PyPI upload Token",
        r"pypi-AgEIcHlwaS5vcmc[A-Za-z0-9\-_]{50,1000}".to_string(),
    )
}

pub fn rapidapi_access_token() -> RuleDef {
    RuleDef::new(
        "rapidapi-access-token",
        "RapidAPI Access Token",
        semi_generic(&["rapidapi"], r"[a-z0-9_-]{50}"),
    )
}

pub fn readme_api_token() -> RuleDef {
    RuleDef::new(
        "readme-api-token",
        "Readme API Token",
        unique_token(r"rdme_[a-z0-9]{70}"),
    )
}

pub fn rubygems_api_token() -> RuleDef {
    RuleDef::new(
        "rubygems-api-token",
        "Rubygem API Token",
        unique_token(r"rubygems_[a-f0-9]{48}"),
    )
}

pub fn scalingo_api_token() -> RuleDef {
    RuleDef::new(
        "scalingo-api-token",
        "Scalingo API Token",
        r"tk-us-[a-zA-Z0-9-_]{48}".to_string(),
    )
}

pub fn sendbird_access_id() -> RuleDef {
    RuleDef::new(
        "sendbird-access-id",
        "Sendbird Access ID",
        semi_generic(&["sendbird"], UUID),
    )
}

pub fn sendbird_access_token() -> RuleDef {
    RuleDef::new(
        "sendbird-access-token",
        "Sendbird Access Token",
        semi_generic(&["sendbird"], r"[a-f0-9]{40}"),
    )
}

pub fn sendgrid_api_token() -> RuleDef {
    RuleDef::new(
        "sendgrid-api-token",
        "SendGrid API Token",
        unique_token(r"SG\.[a-z0-9=_\-\.]{66}"),
    )
    .entropy(2.0)
}

pub fn sendinblue_api_token() -> RuleDef {
    RuleDef::new(
        "sendinblue-api-token",
        "Sendinblue API Token",
        unique_token(r"xkeysib-[a-f0-9]{64}-[a-z0-9]{16}"),
    )
}

pub fn sentry_access_token() -> RuleDef {
    RuleDef::new(
        "sentry-access-token",
        "Sentry Access Token",
        semi_generic(&["sentry"], r"[a-f0-9]{64}"),
    )
}

pub fn shippo_api_token() -> RuleDef {
    RuleDef::new(
        "shippo-api-token",
        "Shippo API Token",
        unique_token(r"shippo_(?:live|test)_[a-f0-9]{40}"),
    )
}

pub fn shopify_access_token() -> RuleDef {
    RuleDef::new(
        "shopify-access-token",
        "Shopify Access Token",
        r"shpat_[a-fA-F0-9]{32}".to_string(),
    )
}

pub fn shopify_custom_access_token() -> RuleDef {
    RuleDef::new(
        "shopify-custom-access-token",
        "Shopify custom Access Token",
        r"shpca_[a-fA-F0-9]{32}".to_string(),
    )
}

pub fn shopify_private_app_access_token() -> RuleDef {
    RuleDef::new(
        "shopify-private-app-access-token",
        "Shopify private app Access Token",
        r"shppa_[a-fA-F0-9]{32}".to_string(),
    )
}

pub fn shopify_shared_secret() -> RuleDef {
    RuleDef::new(
        "shopify-shared-secret",
        "Shopify shared Secret",
        r"shpss_[a-fA-F0-9]{32}".to_string(),
    )
}

pub fn sidekiq_secret() -> RuleDef {
    RuleDef::new(
        "sidekiq-secret",
        "Sidekiq Secret",
        semi_generic(
            &[
                "BUNDLE_ENTERPRISE__CONTRIBSYS__COM",
                "BUNDLE_GEMS__CONTRIBSYS__COM",
            ],
            r"[a-f0-9]{8}:[a-f0-9]{8}",
        ),
    )
}

pub fn sidekiq_sensitive_url() -> RuleDef {
    RuleDef::new(
        "sidekiq-sensitive-url",
        "Sidekiq Sensitive URL",
        r"(?i)\b(https?://)([a-f0-9]{8}:[a-f0-9]{8})@(?:gems\.contribsys\.com|enterprise\.contribsys\.com)".to_string(),
    )
    .secret_group(2)
}

pub fn slack_app_token() -> RuleDef {
    RuleDef::new(
        "slack-app-token",
        "Slack App-level Token",
        r"(?i)(xapp-\d-[A-Z0-9]+-\d+-[a-z0-9]+)".to_string(),
    )
}

pub fn slack_bot_token() -> RuleDef {
    RuleDef::new(
        "slack-bot-token",
        "Slack Bot Token",
        r"(xoxb-[0-9]{10,13}-[0-9]{10,13}[a-zA-Z0-9-]*)".to_string(),
    )
}

pub fn slack_config_access_token() -> RuleDef {
    RuleDef::new(
        "slack-config-access-token",
        "Slack Configuration Access Token",
        r"(?i)(xoxe.xox[bp]-\d-[A-Z0-9]{163,166})".to_string(),
    )
}

pub fn slack_config_refresh_token() -> RuleDef {
    RuleDef::new(
        "slack-config-refresh-token",
        "Slack Configuration refresh Token",
        r"(?i)(xoxe-\d-[A-Z0-9]{146})".to_string(),
    )
}

pub fn slack_legacy_bot_token() -> RuleDef {
    RuleDef::new(
        "slack-legacy-bot-token",
        "Slack Legacy bot Token",
        r"(xoxb-[0-9]{8,14}-[a-zA-Z0-9]{18,26})".to_string(),
    )
}

pub fn slack_legacy_token() -> RuleDef {
    RuleDef::new(
        "slack-legacy-token",
        "Slack Legacy Token",
        r"(xox[os]-\d+-\d+-\d+-[a-fA-F\d]+)".to_string(),
    )
}

pub fn slack_legacy_workspace_token() -> RuleDef {
    RuleDef::new(
        "slack-legacy-workspace-token",
        "Slack Legacy Workspace Token",
        r"(xox[ar]-(?:\d-)?[0-9a-zA-Z]{8,48})".to_string(),
    )
}

pub fn slack_user_token() -> RuleDef {
    RuleDef::new(
        "slack-user-token",
        "Slack User Token",
        r"(xox[pe](?:-[0-9]{10,13}){3}-[a-zA-Z0-9-]{28,34})".to_string(),
    )
}

pub fn slack_webhook_url() -> RuleDef {
    RuleDef::new(
        "slack-webhook-url",
        "Slack Webhook",
        r"(?:https?://)?hooks\.slack\.com/(?:services|workflows)/[A-Za-z0-9+/]{43,46}".to_string(),
    )
}

pub fn snyk_api_token() -> RuleDef {
    RuleDef::new("snyk-api-token", "Snyk API Token", semi_generic(&["snyk"], UUID))
}

pub fn square_access_token() -> RuleDef {
    RuleDef::new(
        "square-access-token",
        "Square Access Token",
        unique_token(r"sq0atp-[0-9a-z\-_]{22}"),
    )
}

pub fn squarespace_access_token() -> RuleDef {
    RuleDef::new(
        "squarespace-access-token",
        "Squarespace Access Token",
        semi_generic(&["squarespace"], UUID),
    )
}

pub fn stripe_access_token() -> RuleDef {
    RuleDef::new(
        "stripe-access-token",
        "Stripe Access Token",
        unique_token(r"(?:sk|pk)_(?:test|live)_[0-9a-z]{10,32}"),
    )
    .entropy(2.0)
}

pub fn sumologic_access_id() -> RuleDef {
    RuleDef::new(
        "sumologic-access-id",
        "SumoLogic Access ID",
        semi_generic(&["sumo"], r"su[a-z0-9]{12}"),
    )
}

pub fn sumologic_access_token() -> RuleDef {
    RuleDef::new(
        "sumologic-access-token",
        "SumoLogic Access Token",
        semi_generic(&["sumo"], r"[a-z0-9]{64}"),
    )
    .entropy(3.0)
}

pub fn telegram_bot_api_token() -> RuleDef {
    RuleDef::new(
        "telegram-bot-api-token",
        "Telegram Bot API Token",
        semi_generic(&["telegram", "tgram"], r"[0-9]{5,16}:A[a-z0-9_\-]{34}"),
    )
}

pub fn travisci_access_token() -> RuleDef {
    RuleDef::new(
        "travisci-access-token",
        "Travis CI Access Token",
        semi_generic(&["travis"], r"[a-z0-9]{22}"),
    )
}

pub fn twilio_api_key() -> RuleDef {
    RuleDef::new(
        "twilio-api-key",
        "Twilio API Key",
        r"SK[0-9a-fA-F]{32}".to_string(),
    )
}

pub fn twitch_api_token() -> RuleDef {
    RuleDef::new(
        "twitch-api-token",
        "Twitch API Token",
        semi_generic(&["twitch"], r"[a-z0-9]{30}"),
    )
}

pub fn twitter_access_secret() -> RuleDef {
    RuleDef::new(
        "twitter-access-secret",
        "Twitter Access Secret",
        semi_generic(&["twitter"], r"[a-z0-9]{45}"),
    )
}

pub fn twitter_access_token() -> RuleDef {
    RuleDef::new(
        "twitter-access-token",
        "Twitter Access Token",
        semi_generic(&["twitter"], r"[0-9]{15,25}-[a-z0-9]{20,40}"),
    )
}

pub fn twitter_api_key() -> RuleDef {
    RuleDef::new(
        "twitter-api-key",
        "Twitter API Key",
        semi_generic(&["twitter"], r"[a-z0-9]{25}"),
    )
}

pub fn twitter_api_secret() -> RuleDef {
    RuleDef::new(
        "twitter-api-secret",
        "Twitter API Secret",
        semi_generic(&["twitter"], r"[a-z0-9]{50}"),
    )
}

pub fn twitter_bearer_token() -> RuleDef {
    RuleDef::new(
        "twitter-bearer-token",
        "Twitter Bearer Token",
        semi_generic(&["twitter"], r"A{22}[a-z0-9%]{80,100}"),
    )
}

pub fn typeform_api_token() -> RuleDef {
    RuleDef::new(
        "typeform-api-token",
        "Typeform API Token",
        semi_generic(&["typeform"], r"tfp_[a-z0-9\-_\.=]{59}"),
    )
}

pub fn vault_batch_token() -> RuleDef {
    RuleDef::new(
        "vault-batch-token",
        "Vault Batch Token",
        unique_token(r"hvb\.[a-z0-9_-]{138,212}"),
    )
}

pub fn vault_service_token() -> RuleDef {
    RuleDef::new(
        "vault-service-token",
        "Vault Service Token",
        unique_token(r"hvs\.[a-z0-9_-]{90,100}"),
    )
}

pub fn yandex_access_token() -> RuleDef {
    RuleDef::new(
        "yandex-access-token",
        "Yandex Access Token",
        semi_generic(
            &["yandex"],
            r"t1\.[a-z0-9_-]+={0,2}\.[a-z0-9_-]{86}={0,2}",
        ),
    )
}

pub fn yandex_api_key() -> RuleDef {
    RuleDef::new(
        "yandex-api-key",
        "Yandex API Key",
        semi_generic(&["yandex"], r"AQVN[a-z0-9_\-]{35,38}"),
    )
}

pub fn yandex_aws_access_token() -> RuleDef {
    RuleDef::new(
        "yandex-aws-access-token",
        "Yandex AWS Access Token",
        semi_generic(&["yandex"], r"YC[a-z0-9_\-]{38}"),
    )
}

pub fn zendesk_secret_key() -> RuleDef {
    RuleDef::new(
        "zendesk-secret-key",
        "Zendesk Secret Key",
        semi_generic(&["zendesk"], r"[a-z0-9]{40}"),
    )
}
