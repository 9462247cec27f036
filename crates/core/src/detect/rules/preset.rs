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

use super::*;

/// Every built-in detection rule.
pub fn all() -> Vec<RuleDef> {
    vec![
        adobe_client_id(),
        adobe_client_secret(),
        age_secret_key(),
        airtable_api_key(),
        algolia_api_key(),
        alibaba_access_key_id(),
        alibaba_secret_key(),
        asana_client_id(),
        asana_client_secret(),
        atlassian_api_token(),
        aws_access_token(),
        beamer_api_token(),
        bitbucket_client_id(),
        bitbucket_client_secret(),
        bittrex_access_key(),
        bittrex_secret_key(),
        clojars_api_token(),
        codecov_access_token(),
        coinbase_access_token(),
        confluent_access_token(),
        confluent_secret_key(),
        contentful_delivery_api_token(),
        databricks_api_token(),
        datadog_access_token(),
        digitalocean_access_token(),
        digitalocean_pat(),
        digitalocean_refresh_token(),
        discord_api_token(),
        discord_client_id(),
        discord_client_secret(),
        doppler_api_token(),
        droneci_access_token(),
        dropbox_api_token(),
        dropbox_long_lived_api_token(),
        dropbox_short_lived_api_token(),
        duffel_api_token(),
        dynatrace_api_token(),
        easypost_api_token(),
        easypost_test_api_token(),
        etsy_access_token(),
        facebook_access_token(),
        facebook_secret(),
        fastly_api_token(),
        finicity_api_token(),
        finicity_client_secret(),
        finnhub_access_token(),
        flickr_access_token(),
        flutterwave_encryption_key(),
        flutterwave_public_key(),
        flutterwave_secret_key(),
        flyio_access_token(),
        frameio_api_token(),
        freshbooks_access_token(),
        gcp_api_key(),
        generic_api_key(),
        github_app_token(),
        github_fine_grained_pat(),
        github_oauth(),
        github_pat(),
        github_refresh_token(),
        gitlab_pat(),
        gitlab_pipeline_trigger_token(),
        gitlab_runner_registration_token(),
        gitter_access_token(),
        gocardless_api_token(),
        grafana_api_key(),
        grafana_cloud_api_token(),
        grafana_service_account_token(),
        hashicorp_tf_api_token(),
        heroku_api_key(),
        hubspot_api_key(),
        huggingface_access_token(),
        infracost_api_token(),
        intercom_api_key(),
        jfrog_api_key(),
        jfrog_identity_token(),
        jwt(),
        kraken_access_token(),
        kucoin_access_token(),
        kucoin_secret_key(),
        launchdarkly_access_token(),
        linear_api_key(),
        linear_client_secret(),
        linkedin_client_id(),
        linkedin_client_secret(),
        lob_api_key(),
        lob_pub_api_key(),
        mailchimp_api_key(),
        mailgun_private_api_token(),
        mailgun_pub_key(),
        mailgun_signing_key(),
        mapbox_api_token(),
        mattermost_access_token(),
        messagebird_api_token(),
        microsoft_teams_webhook(),
        netlify_access_token(),
        new_relic_browser_api_token(),
        new_relic_user_api_id(),
        new_relic_user_api_key(),
        npm_access_token(),
        nytimes_access_token(),
        okta_access_token(),
        openai_api_key(),
        openshift_user_token(),
        plaid_api_token(),
        plaid_client_id(),
        plaid_secret_key(),
        planetscale_api_token(),
        planetscale_oauth_token(),
        planetscale_password(),
        postman_api_token(),
        prefect_api_token(),
        private_key(),
        pulumi_api_token(),
        pypi_upload_token(),
        rapidapi_access_token(),
        readme_api_token(),
        rubygems_api_token(),
        scalingo_api_token(),
        sendbird_access_id(),
        sendbird_access_token(),
        sendgrid_api_token(),
        sendinblue_api_token(),
        sentry_access_token(),
        shippo_api_token(),
        shopify_access_token(),
        shopify_custom_access_token(),
        shopify_private_app_access_token(),
        shopify_shared_secret(),
        sidekiq_secret(),
        sidekiq_sensitive_url(),
        slack_app_token(),
        slack_bot_token(),
        slack_config_access_token(),
        slack_config_refresh_token(),
        slack_legacy_bot_token(),
        slack_legacy_token(),
        slack_legacy_workspace_token(),
        slack_user_token(),
        slack_webhook_url(),
        snyk_api_token(),
        square_access_token(),
        squarespace_access_token(),
        stripe_access_token(),
        sumologic_access_id(),
        sumologic_access_token(),
        telegram_bot_api_token(),
        travisci_access_token(),
        twilio_api_key(),
        twitch_api_token(),
        twitter_access_secret(),
        twitter_access_token(),
        twitter_api_key(),
        twitter_api_secret(),
        twitter_bearer_token(),
        typeform_api_token(),
        vault_batch_token(),
        vault_service_token(),
        yandex_access_token(),
        yandex_api_key(),
        yandex_aws_access_token(),
        zendesk_secret_key(),
    ]
}

/// Rules that fire a lot on ordinary web content without reliably pointing
/// at a leaked credential.
const NOISY: &[&str] = &[
    "generic-api-key",
    "jwt",
    "microsoft-teams-webhook",
    "sidekiq-sensitive-url",
    "slack-webhook-url",
];

/// All rules except the hand-curated noisy ones.
pub fn most() -> Vec<RuleDef> {
    all()
        .into_iter()
        .filter(|rule| !NOISY.contains(&rule.id))
        .collect()
}

/// Only rules for secrets, access and refresh tokens, and private keys.
/// Client IDs, public keys and webhook URLs are deliberately left out.
pub fn secret() -> Vec<RuleDef> {
    vec![
        adobe_client_secret(),
        age_secret_key(),
        alibaba_secret_key(),
        asana_client_secret(),
        bitbucket_client_secret(),
        bittrex_secret_key(),
        codecov_access_token(),
        coinbase_access_token(),
        confluent_access_token(),
        confluent_secret_key(),
        datadog_access_token(),
        digitalocean_access_token(),
        digitalocean_pat(),
        digitalocean_refresh_token(),
        discord_client_secret(),
        droneci_access_token(),
        dropbox_api_token(),
        dropbox_long_lived_api_token(),
        dropbox_short_lived_api_token(),
        etsy_access_token(),
        facebook_access_token(),
        facebook_secret(),
        finicity_client_secret(),
        finnhub_access_token(),
        flickr_access_token(),
        flutterwave_secret_key(),
        freshbooks_access_token(),
        github_app_token(),
        github_fine_grained_pat(),
        github_oauth(),
        github_pat(),
        github_refresh_token(),
        gitlab_pat(),
        gitter_access_token(),
        huggingface_access_token(),
        kraken_access_token(),
        kucoin_access_token(),
        kucoin_secret_key(),
        launchdarkly_access_token(),
        linear_client_secret(),
        linkedin_client_secret(),
        mailgun_private_api_token(),
        mattermost_access_token(),
        netlify_access_token(),
        npm_access_token(),
        nytimes_access_token(),
        okta_access_token(),
        openai_api_key(),
        plaid_api_token(),
        plaid_secret_key(),
        planetscale_password(),
        private_key(),
        rapidapi_access_token(),
        sendbird_access_token(),
        sentry_access_token(),
        shopify_access_token(),
        shopify_custom_access_token(),
        shopify_private_app_access_token(),
        shopify_shared_secret(),
        sidekiq_secret(),
        slack_config_access_token(),
        slack_config_refresh_token(),
        square_access_token(),
        squarespace_access_token(),
        stripe_access_token(),
        sumologic_access_token(),
        travisci_access_token(),
        twitter_access_secret(),
        twitter_access_token(),
        twitter_api_secret(),
        twitter_bearer_token(),
        vault_batch_token(),
        vault_service_token(),
        yandex_access_token(),
        yandex_aws_access_token(),
        zendesk_secret_key(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::engine::{DefaultEngine, MatchEngine};
    use crate::detect::rule::Rule;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_normalized() {
        let mut seen = HashSet::new();

        for rule in all() {
            assert!(seen.insert(rule.id), "duplicate rule id: {}", rule.id);
            assert_eq!(
                rule.id,
                rule.id.to_lowercase().replace([' ', '_'], "-"),
                "rule id not normalized: {}",
                rule.id
            );
        }
    }

    #[test]
    fn every_rule_compiles() {
        for def in all() {
            Rule::<DefaultEngine>::from_def(&def)
                .unwrap_or_else(|err| panic!("rule {} failed to compile: {err}", def.id));
        }
    }

    #[test]
    fn combined_alternation_compiles() {
        let exprs = all().iter().map(|r| r.regex.clone()).collect::<Vec<_>>();
        DefaultEngine::compile(&exprs.join("|")).unwrap();
    }

    #[test]
    fn most_and_secret_are_subsets_of_all() {
        let all_ids: HashSet<_> = all().iter().map(|r| r.id).collect();

        let most = most();
        let secret = secret();

        assert!(most.len() < all_ids.len());
        assert!(secret.len() < most.len());

        for rule in most.iter().chain(secret.iter()) {
            assert!(all_ids.contains(rule.id), "unknown rule in preset: {}", rule.id);
        }
    }

    #[test]
    fn most_skips_the_noisy_rules() {
        let most_ids: HashSet<_> = most().iter().map(|r| r.id).collect();

        for noisy in NOISY {
            assert!(!most_ids.contains(noisy));
        }
    }
}
