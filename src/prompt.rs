/// Separator placed between favorite titles in the prompt
const TITLE_SEPARATOR: &str = ",";

/// Builds the book-sommelier instruction sent to the model.
///
/// The template fixes the persona, asks for exactly three books with title,
/// author and a 20-30 character reason, and demands a bare JSON array of
/// `{"title", "author", "reason"}` objects. Favorites are embedded verbatim,
/// comma-joined; an empty list leaves that section blank.
pub fn build_recommendation_prompt(favorite_books: &[String]) -> String {
    format!(
        r#"
あなたはプロのブックソムリエです。
以下のルールに従って、ユーザーが次に読むべき本をおすすめしてください。

# ルール
- ユーザーが好きな本のリストに基づいて、関連性が高く、次に読みたくなるような本を3冊提案してください。
- 各書籍について、必ず「タイトル」「著者」「おすすめする理由」を提示してください。
- 「おすすめする理由」は、ユーザーの心に響くように、20文字から30文字程度で簡潔に記述してください。
- 出力は必ず以下のJSON形式のリストにしてください。他の文章は一切含めないでください。
[
    {{"title": "本のタイトル", "author": "著者名", "reason": "おすすめ理由"}},
    {{"title": "本のタイトル", "author": "著者名", "reason": "おすすめ理由"}}
]

# ユーザーが好きな本のリスト
{favorites}
"#,
        favorites = favorite_books.join(TITLE_SEPARATOR)
    )
}
