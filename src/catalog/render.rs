//! HTML fragments for the product list and the image preview.

use std::fmt::Write;

use crate::catalog::image::ImageNormalizer;
use crate::catalog::model::Product;

/// Markup shown in the image preview before an image is chosen or after the
/// form is reset.
pub const IMAGE_PREVIEW_PLACEHOLDER: &str =
    "<i class=\"fas fa-camera\"></i>\n<p>IMAGE PREVIEW</p>\n";

const NO_PRODUCTS: &str = "<div class=\"no-products\">No products found</div>\n";

/// Renders the whole product list. The result replaces the container's
/// content rather than being appended to it.
pub fn render_products(
    products: &[Product],
    normalizer: &ImageNormalizer,
    placeholder_image: &str,
) -> String {
    if products.is_empty() {
        return NO_PRODUCTS.to_string();
    }

    let mut html = String::new();
    for product in products {
        render_card(&mut html, product, normalizer, placeholder_image);
    }
    html
}

fn render_card(
    out: &mut String,
    product: &Product,
    normalizer: &ImageNormalizer,
    placeholder_image: &str,
) {
    let image = match product.image() {
        "" => placeholder_image.to_string(),
        link => normalizer.normalize(link),
    };
    let name = escape(product.name());
    let placeholder = escape(placeholder_image);

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        concat!(
            "<div class=\"product-card\">\n",
            "  <div class=\"product-image\">\n",
            "    <img src=\"{image}\" alt=\"{name}\" onerror=\"this.src='{placeholder}'\">\n",
            "  </div>\n",
            "  <div class=\"product-details\">\n",
            "    <h3>{name}</h3>\n",
            "    <p class=\"product-price\">${price}</p>\n",
            "    <p class=\"product-qty\">QTY: {quantity}</p>\n",
            "    <p class=\"product-code\">Code: {code}</p>\n",
            "    <p class=\"product-category\">Category: {category}</p>\n",
            "  </div>\n",
            "</div>\n",
        ),
        image = escape(&image),
        name = name,
        placeholder = placeholder,
        price = escape(product.price()),
        quantity = escape(product.quantity()),
        code = escape(product.code()),
        category = escape(product.category()),
    );
}

/// Preview fragment for an image link typed into the entry form. The hidden
/// input carries the normalized link so it is submitted as-is.
pub fn render_image_preview(
    link: &str,
    normalizer: &ImageNormalizer,
    placeholder_image: &str,
) -> String {
    let direct = escape(&normalizer.normalize(link));
    let placeholder = escape(placeholder_image);
    format!(
        concat!(
            "<img src=\"{direct}\" alt=\"Product Image\" onerror=\"this.src='{placeholder}'\">\n",
            "<input type=\"hidden\" id=\"imageUrl\" name=\"imageUrl\" value=\"{direct}\">\n",
        ),
        direct = direct,
        placeholder = placeholder,
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
