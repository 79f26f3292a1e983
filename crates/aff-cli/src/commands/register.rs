use aff_auth::ViewAdapter;
use aff_core::entities::RegistrationForm;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegisterArgs;
use crate::commands::api_outcome;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RegisterResponse {
    registered: bool,
    email: String,
}

pub async fn handle(
    args: RegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(form) = complete_address(args, ctx).await else {
        return Ok(());
    };
    let email = form.email.trim().to_string();

    let Some(view) = ctx.settle(ctx.manager.register(form).await.into()) else {
        return Ok(());
    };
    output(
        &RegisterResponse {
            registered: true,
            email,
        },
        flags.format,
    )?;
    ctx.adapter.navigate(view);
    Ok(())
}

/// Fill street, district, city and state from the CEP when any is missing.
async fn complete_address(args: RegisterArgs, ctx: &AppContext) -> Option<RegistrationForm> {
    let needs_lookup = [&args.street, &args.district, &args.city, &args.state]
        .iter()
        .any(|field| field.as_deref().is_none_or(|v| v.trim().is_empty()));

    let found = if needs_lookup {
        match ctx.settle(api_outcome(ctx.postal.lookup(&args.cep).await)) {
            Some(found) => found,
            None => return None,
        }
    } else {
        None
    };
    if needs_lookup && found.is_none() {
        tracing::warn!(cep = %args.cep, "CEP not found; address fields must be given explicitly");
    }
    let found = found.unwrap_or_default();

    let pick = |given: Option<String>, looked_up: String| {
        given
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(looked_up)
    };

    Some(RegistrationForm {
        person_type: args.person_type,
        tax_id: args.tax_id,
        name: args.name,
        email: args.email,
        phone: args.phone.unwrap_or_default(),
        cep: args.cep,
        street: pick(args.street, found.street),
        complement: args.complement.unwrap_or_default(),
        number: args.number,
        district: pick(args.district, found.district),
        city: pick(args.city, found.city),
        state: pick(args.state, found.state),
        password: args.password,
    })
}
