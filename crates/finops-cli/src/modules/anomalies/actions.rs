use crate::cli_args::*;
use crate::modules::shared::parse_payload;
use crate::modules::system::output::print_json;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_anomaly(
    args: AnomalyArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let anomalies = ctx.client.anomalies();
    let response = match args.command {
        AnomalyCommand::List(args) => anomalies.list(&args.to_query()).await?,
        AnomalyCommand::Get(args) => anomalies.get(args.id).await?,
        AnomalyCommand::Update(args) => {
            let payload = parse_payload(&args.data)?;
            anomalies.update(args.id, payload).await?
        }
        AnomalyCommand::Resolve(args) => anomalies.resolve(args.id).await?,
        AnomalyCommand::FalsePositive(args) => anomalies.mark_as_false_positive(args.id).await?,
    };
    print_json(&response)
}
