use swc_core::common::{chain, comments::SingleThreadedComments, pass::Optional};
use swc_core::ecma::{
  ast::EsVersion,
  transforms::compat::{es2015, es2016, es2017, es2018, es2019, es2020, es2021, es2022},
  visit::Fold,
};

use crate::Marks;

/// Compat passes for every edition newer than `target`, newest first.
///
/// Helpers are only recorded, so this must run inside `HELPERS.set` together
/// with `inject_helpers`. [crate::to_cjs] does both.
pub fn downlevel(
  target: EsVersion,
  comments: &SingleThreadedComments,
  marks: Marks,
) -> impl Fold + '_ {
  chain!(
    Optional::new(
      es2022::es2022(Some(comments), Default::default()),
      target < EsVersion::Es2022
    ),
    Optional::new(es2021::es2021(), target < EsVersion::Es2021),
    Optional::new(
      es2020::es2020(Default::default()),
      target < EsVersion::Es2020
    ),
    Optional::new(es2019::es2019(), target < EsVersion::Es2019),
    Optional::new(es2018::es2018(Default::default()), target < EsVersion::Es2018),
    Optional::new(
      es2017::es2017(Default::default(), Some(comments), marks.unresolved),
      target < EsVersion::Es2017
    ),
    Optional::new(es2016::es2016(), target < EsVersion::Es2016),
    Optional::new(
      es2015::es2015(marks.unresolved, Some(comments), Default::default()),
      target < EsVersion::Es2015
    ),
  )
}
