use crate::cli_args::*;
use crate::modules::shared::parse_payload;
use crate::modules::system::output::{print_deleted, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_report(args: ReportArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let reports = ctx.client.reports();
    match args.command {
        ReportCommand::List(args) => print_json(&reports.list(&args.to_query()).await?)?,
        ReportCommand::Get(args) => print_json(&reports.get(args.id).await?)?,
        ReportCommand::Create(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&reports.create(payload).await?)?;
        }
        ReportCommand::Delete(args) => {
            reports.delete(args.id).await?;
            print_deleted("Report", args.id);
        }
        ReportCommand::IncomeStatement(args) => {
            let report = reports
                .generate_income_statement(args.start, args.end)
                .await?;
            print_json(&report)?;
        }
    }
    Ok(())
}
