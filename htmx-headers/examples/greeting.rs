use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use htmx_headers::{HtmxRequest, Redirect, RequestHeader, ResponseHeader, TriggerEvents};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .service(web::resource("/").to(index))
            .service(web::resource("/greeting").to(greeting))
            .service(web::resource("/away").to(away))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}

async fn index(htmx: HtmxRequest) -> impl Responder {
    HttpResponse::Ok().content_type("text/html").body(format!(
        r##"<!DOCTYPE html>
<html>
    <head>
        <title>htmx-headers example</title>
        <script src="https://unpkg.com/htmx.org@2.0.6"></script>
    </head>
    <body hx-on:myevent="console.log('myevent fired')">
        <div>Is htmx: {}</div>
        <div>Boosted: {}</div>
        <button hx-get="/greeting" hx-target="#greeting">Greet</button>
        <button hx-get="/away">Go away</button>
        <a href="/away">Go away without htmx</a>
        <div id="greeting"></div>
    </body>
</html>
"##,
        htmx.is_htmx, htmx.boosted
    ))
}

async fn greeting(req: HttpRequest) -> impl Responder {
    let htmx = HtmxRequest::new(&req);
    if !htmx.is_htmx {
        return HttpResponse::BadRequest().finish();
    }

    let mut res = HttpResponse::Ok();
    TriggerEvents::new()
        .event("myevent")
        .write_to(&mut res, ResponseHeader::TRIGGER);
    res.body(format!("Hello {}", RequestHeader::CURRENT_URL.get(&req)))
}

async fn away() -> impl Responder {
    Redirect::to("https://htmx.org/").see_other()
}
