//! `datamock sample`: print values of a single kind.

use clap::ValueEnum;
use datamock_core::{FloatOptions, HashOptions};
use datamock_generator::har::HarTimingOptions;
use datamock_generator::http::{FormDataOptions, RequestOptions, ResponseOptions};
use datamock_generator::internet::{EmailOptions, UserNameOptions};
use datamock_generator::lorem::{ParagraphOptions, SentenceOptions};
use datamock_generator::person::NameOptions;
use datamock_generator::software::VersionOptions;
use datamock_generator::svg::SvgImageOptions;
use datamock_generator::time::DateTimeFormat;
use datamock_generator::{DataMock, DataMockInit};
use std::io::Write;
use tracing::debug;

use crate::args::SampleArgs;
use crate::config::load_locale;

/// Kinds of value `datamock sample` can print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    FirstName,
    LastName,
    Name,
    Gender,
    JobTitle,
    Email,
    UserName,
    Domain,
    Url,
    Ip,
    Ipv6,
    Port,
    Color,
    Browser,
    Word,
    Sentence,
    Paragraph,
    Slug,
    Uuid,
    Integer,
    Float,
    Boolean,
    Hash,
    Date,
    Month,
    Weekday,
    Version,
    HttpMethod,
    /// HTTP request as a JSON object
    HttpRequest,
    /// HTTP response as a JSON object
    HttpResponse,
    /// `multipart/form-data` body, spans several lines
    FormData,
    /// HAR entry timings as a JSON object
    HarTiming,
    /// SVG document, spans several lines
    Svg,
}

/// Draw one value of `kind` and render it as text.
pub fn sample_value(mock: &DataMock, kind: SampleKind) -> anyhow::Result<String> {
    let sampler = mock.types();
    let value = match kind {
        SampleKind::FirstName => mock.person().first_name(None)?,
        SampleKind::LastName => mock.person().last_name(None)?,
        SampleKind::Name => mock.person().name(NameOptions::default())?,
        SampleKind::Gender => mock.person().gender(false)?,
        SampleKind::JobTitle => mock.person().job_title()?,
        SampleKind::Email => mock.internet().email(&EmailOptions::default())?,
        SampleKind::UserName => mock.internet().user_name(&UserNameOptions::default())?,
        SampleKind::Domain => mock.internet().domain()?,
        SampleKind::Url => mock.internet().uri()?,
        SampleKind::Ip => mock.internet().ip(),
        SampleKind::Ipv6 => mock.internet().ipv6(),
        SampleKind::Port => mock.internet().port().to_string(),
        SampleKind::Color => mock.internet().color(0, 0, 0),
        SampleKind::Browser => mock.internet().browser()?,
        SampleKind::Word => mock.word().noun(None)?,
        SampleKind::Sentence => mock.lorem().sentence(&SentenceOptions::default())?,
        SampleKind::Paragraph => mock.lorem().paragraph(ParagraphOptions::default())?,
        SampleKind::Slug => mock.lorem().slug(None)?,
        SampleKind::Uuid => sampler.uuid().to_string(),
        SampleKind::Integer => sampler.integer(0, i64::from(u32::MAX)).to_string(),
        SampleKind::Float => sampler.float(FloatOptions::default())?.to_string(),
        SampleKind::Boolean => sampler.boolean(50)?.to_string(),
        SampleKind::Hash => sampler.hash(HashOptions::default()),
        SampleKind::Date => mock.time().date_time(DateTimeFormat::Rfc3339)?,
        SampleKind::Month => mock.time().month_name(false)?,
        SampleKind::Weekday => mock.time().weekday_name(false)?,
        SampleKind::Version => mock.software().version(VersionOptions::default()),
        SampleKind::HttpMethod => mock.internet().http_method(None)?,
        SampleKind::HttpRequest => {
            serde_json::to_string(&mock.http().request(&RequestOptions::default())?)?
        }
        SampleKind::HttpResponse => {
            serde_json::to_string(&mock.http().response(&ResponseOptions::default())?)?
        }
        SampleKind::FormData => mock.http().form(&FormDataOptions::default())?.to_body(),
        SampleKind::HarTiming => {
            serde_json::to_string(&mock.har().timing(HarTimingOptions { ssl: true }))?
        }
        SampleKind::Svg => mock.svg().image(SvgImageOptions::default())?,
    };
    Ok(value)
}

/// Write `args.count` values to `out`, one per line.
pub fn run_sample<W: Write>(args: &SampleArgs, out: &mut W) -> anyhow::Result<()> {
    let locale = load_locale(args.locale.as_deref())?;
    let mock = DataMock::new(DataMockInit {
        seed: args.seed.engine_seed(),
        locale,
    });
    debug!(kind = ?args.kind, count = args.count, "Sampling values");

    for _ in 0..args.count {
        let value = sample_value(&mock, args.kind)?;
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}
