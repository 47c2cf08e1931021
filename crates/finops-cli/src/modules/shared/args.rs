use clap::Args;
use finops_client::services::ListQuery;

#[derive(Args, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, help = "Sort field, prefix with '-' for descending")]
    pub ordering: Option<String>,
    #[arg(
        long = "filter",
        value_name = "KEY=VALUE",
        value_parser = parse_key_val,
        help = "Extra query filter, repeatable"
    )]
    pub filters: Vec<(String, String)>,
}

impl ListArgs {
    pub fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::default();
        if let Some(page) = self.page {
            query = query.page(page);
        }
        if let Some(search) = &self.search {
            query = query.search(search.clone());
        }
        if let Some(ordering) = &self.ordering {
            query = query.ordering(ordering.clone());
        }
        for (key, value) in &self.filters {
            query = query.filter(key.clone(), value.clone());
        }
        query
    }
}

#[derive(Args)]
pub struct IdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct DataArgs {
    #[arg(long, help = "JSON object, or @path to read it from a file")]
    pub data: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(long, help = "JSON object, or @path to read it from a file")]
    pub data: String,
}

pub(crate) fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("filter key is empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}
