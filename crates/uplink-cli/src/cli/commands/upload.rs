use std::sync::Arc;

use uplink_artifact::{ArtifactStore, AwsCredentials, ObjectArtifactStore};
use uplink_client::{
    GrpcMetricsService, RelayClient, RelayOptions, UploadOptions, UploadTarget, Uploader,
};

use crate::cli::args::UploadArgs;
use crate::exit_codes;

use super::load_report;

pub(crate) async fn run(args: UploadArgs) -> anyhow::Result<i32> {
    let report = load_report(&args.report)?;

    // Dry runs never build an S3 client; conversion still writes the
    // converted files next to their sources.
    let store: Arc<dyn ArtifactStore> = if args.dry_run {
        Arc::new(ObjectArtifactStore::memory())
    } else {
        Arc::new(ObjectArtifactStore::s3(
            &report.bucket,
            credentials(&args).as_ref(),
        )?)
    };

    // A configured relay host selects the relay path for the whole report;
    // otherwise every test gets its own series lifecycle.
    let target = if let Some(host) = args.relay_host.clone() {
        let relay = RelayClient::new(RelayOptions {
            host,
            region: args.relay_region.clone().unwrap_or_default(),
        })?;
        UploadTarget::Relay(relay)
    } else if args.dry_run {
        // Never dialed: the dry-run gate skips transmission entirely.
        UploadTarget::Metrics(Arc::new(GrpcMetricsService::connect_lazy(
            args.service.clone(),
        )?))
    } else {
        UploadTarget::Metrics(Arc::new(
            GrpcMetricsService::connect(args.service.clone()).await?,
        ))
    };

    let uploader = Uploader::new(store, target);
    let options = UploadOptions {
        serialize_upload: args.serialize,
        dry_run: args.dry_run,
    };

    match uploader.upload(&report, options).await {
        Ok(()) => {
            eprintln!(
                "report uploaded: task_id={} execution={}",
                report.task_id, report.execution
            );
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("upload failed: {e}");
            Ok(exit_codes::UPLOAD_FAILED)
        }
    }
}

fn credentials(args: &UploadArgs) -> Option<AwsCredentials> {
    match (&args.aws_access_key, &args.aws_secret_key) {
        (Some(access_key), Some(secret_key)) => Some(AwsCredentials {
            access_key: access_key.clone(),
            secret_key: secret_key.clone(),
            session_token: args.aws_session_token.clone(),
        }),
        _ => None,
    }
}
