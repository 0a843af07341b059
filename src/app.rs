use std::time::Instant;

use chrono::NaiveDate;

use crate::cli::{Cli, ListArgs, PetCommand};
use crate::core::{
    Pagination, Pet, PetId, SelectionStore, SortOption, date_key, next_page, pet_of_the_day_with,
    prev_page,
};
use crate::error::AppError;
use crate::i18n::Lang;
use crate::output::{
    ListingView, ViewOptions, output_featured_json, output_filters_json, output_listing_json,
    output_pet_json, print_featured, print_pet_detail, print_pet_table,
};
use crate::source::{HttpPetSource, PageQuery, PetSource};
use crate::store::{FileSelectionStore, FilterState, FilterStore};
use crate::utils::{Timezone, debug_log, parse_date};

pub(crate) struct CommandContext<'a> {
    pub(crate) source: &'a dyn PetSource,
    pub(crate) view: ViewOptions,
    pub(crate) timezone: Timezone,
    pub(crate) page_size: u32,
    pub(crate) json: bool,
}

impl CommandContext<'_> {
    /// Progress line on stderr, silent in JSON mode
    fn status(&self, message: impl AsRef<str>) {
        if !self.json {
            eprintln!("{}", message.as_ref());
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// One rendered catalog page
#[derive(Debug)]
pub(crate) struct Listing {
    /// Filters actually applied, after clamping to the last page
    pub(crate) state: FilterState,
    pub(crate) pets: Vec<Pet>,
    pub(crate) pagination: Pagination,
    /// Outer `Some` when the pet of the day was requested
    pub(crate) featured: Option<Option<Pet>>,
}

/// Apply the command line on top of the remembered filters
pub(crate) fn resolve_filters(saved: FilterState, args: &ListArgs) -> FilterState {
    let sort = SortOption {
        key: args.sort.unwrap_or(saved.sort.key),
        direction: args.order.unwrap_or(saved.sort.direction),
    };
    let state = saved.with_sort(sort);

    if let Some(page) = args.page {
        state.with_page(page)
    } else if args.next {
        state.with_page(next_page(state.page))
    } else if args.prev {
        state.with_page(prev_page(state.page))
    } else {
        state
    }
}

fn load_page(
    source: &dyn PetSource,
    state: FilterState,
    page_size: u32,
) -> Result<(FilterState, Vec<Pet>, Pagination), AppError> {
    let query = PageQuery {
        page: state.page,
        limit: page_size,
        sort: state.sort,
    };
    let page = source.fetch_page(&query)?;
    let pagination = Pagination::new(state.page, page_size, page.total_count);
    if !pagination.overshoots() {
        return Ok((state, page.pets, pagination));
    }

    let last = pagination.total_pages();
    debug_log(format!(
        "page {} is past the end, showing page {last}",
        state.page
    ));
    let state = state.with_page(last);
    let page = source.fetch_page(&PageQuery { page: last, ..query })?;
    let pagination = Pagination::new(last, page_size, page.total_count);
    Ok((state, page.pets, pagination))
}

/// Fetch a page and, when `featured_day` is set, the pet of the day alongside it.
/// A failure picking the featured pet is reported and leaves it empty.
pub(crate) fn load_listing<S>(
    source: &dyn PetSource,
    store: &mut S,
    state: FilterState,
    page_size: u32,
    featured_day: Option<NaiveDate>,
) -> Result<Listing, AppError>
where
    S: SelectionStore + Send + ?Sized,
{
    let (page, featured) = match featured_day {
        Some(today) => {
            let (page, pick) = rayon::join(
                || load_page(source, state, page_size),
                || pet_of_the_day_with(store, today, || source.fetch_all()),
            );
            let pick = pick.unwrap_or_else(|e| {
                eprintln!("Warning: could not pick the pet of the day: {e}");
                None
            });
            (page?, Some(pick))
        }
        None => (load_page(source, state, page_size)?, None),
    };

    let (state, pets, pagination) = page;
    Ok(Listing {
        state,
        pets,
        pagination,
        featured,
    })
}

fn handle_list(
    ctx: &CommandContext<'_>,
    args: &ListArgs,
    filters: &FilterStore,
    selection: &mut FileSelectionStore,
) -> Result<(), AppError> {
    let state = resolve_filters(filters.load(), args);
    let today = ctx.timezone.today();

    let start = Instant::now();
    let listing = load_listing(
        ctx.source,
        selection,
        state,
        ctx.page_size,
        args.featured.then_some(today),
    )?;
    ctx.status(format!(
        "Fetched page {} sorted by {} from {} ({:.2}ms)",
        listing.state.page,
        listing.state.sort,
        ctx.source.describe(),
        elapsed_ms(start)
    ));
    filters.save(listing.state);

    let date = date_key(today);
    if ctx.json {
        let featured = listing
            .featured
            .as_ref()
            .map(|pick| (pick.as_ref(), date.as_str()));
        println!(
            "{}",
            output_listing_json(
                &listing.pets,
                &listing.pagination,
                listing.state.sort,
                featured
            )
        );
        return Ok(());
    }

    if let Some(pick) = &listing.featured {
        print_featured(pick.as_ref(), &date, ctx.view);
    }
    print_pet_table(
        &ListingView {
            pets: &listing.pets,
            pagination: listing.pagination,
            sort: listing.state.sort,
            has_active_filters: listing.state.has_active_filters(),
        },
        ctx.view,
    );
    Ok(())
}

fn handle_show(ctx: &CommandContext<'_>, id: &str) -> Result<(), AppError> {
    let id = PetId::parse(id);
    let start = Instant::now();
    let pet = ctx.source.fetch_by_id(&id)?;
    ctx.status(format!(
        "Fetched pet {id} from {} ({:.2}ms)",
        ctx.source.describe(),
        elapsed_ms(start)
    ));

    if ctx.json {
        println!("{}", output_pet_json(&pet));
    } else {
        print_pet_detail(&pet, ctx.view);
    }
    Ok(())
}

fn handle_today(
    ctx: &CommandContext<'_>,
    date: Option<&str>,
    selection: &mut FileSelectionStore,
) -> Result<(), AppError> {
    let day = match date {
        Some(input) => parse_date(input)?,
        None => ctx.timezone.today(),
    };

    let start = Instant::now();
    let pick = pet_of_the_day_with(selection, day, || {
        let pets = ctx.source.fetch_all()?;
        ctx.status(format!(
            "Fetched {} pets from {} ({:.2}ms)",
            pets.len(),
            ctx.source.describe(),
            elapsed_ms(start)
        ));
        Ok::<_, AppError>(pets)
    })?;

    let date = date_key(day);
    if ctx.json {
        println!("{}", output_featured_json(pick.as_ref(), &date));
    } else {
        print_featured(pick.as_ref(), &date, ctx.view);
        println!();
    }
    Ok(())
}

fn handle_reset(ctx: &CommandContext<'_>, filters: &FilterStore) {
    let state = filters.reset();
    if ctx.json {
        println!("{}", output_filters_json(state.sort, state.page));
    } else {
        println!("{}", ctx.view.lang.labels().filters_reset);
    }
}

pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let lang = Lang::parse(cli.lang.as_deref())?;
    let source = HttpPetSource::new(cli.api_url());
    let ctx = CommandContext {
        source: &source,
        view: ViewOptions {
            use_color: cli.use_color(),
            lang,
        },
        timezone,
        page_size: cli.page_size(),
        json: cli.json,
    };
    debug_log(format!(
        "api {}, {} pets per page, timezone {timezone:?}",
        source.describe(),
        ctx.page_size
    ));

    let filters = FilterStore::open_default();
    let mut selection = FileSelectionStore::open_default();
    debug_log(format!(
        "pet of the day cache at {}",
        selection.path().display()
    ));

    match PetCommand::from(cli.command) {
        PetCommand::List(args) => handle_list(&ctx, &args, &filters, &mut selection),
        PetCommand::Show { id } => handle_show(&ctx, &id),
        PetCommand::Today { date } => handle_today(&ctx, date.as_deref(), &mut selection),
        PetCommand::Reset => {
            handle_reset(&ctx, &filters);
            Ok(())
        }
    }
}
